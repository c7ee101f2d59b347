pub mod combat;
pub mod damage_roll;
