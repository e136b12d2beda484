pub mod horseshoe;
pub mod influence;
