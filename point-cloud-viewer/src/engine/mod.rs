pub mod assets;
pub mod core;
pub mod input;
pub mod loading;
pub mod mesh;
pub mod rotation;
pub mod scene;
pub mod visibility;
