pub mod mesh;
pub mod planform;
