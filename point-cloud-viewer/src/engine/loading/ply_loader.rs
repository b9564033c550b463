use bevy::asset::{AssetLoader, LoadContext, io::Reader};
use bevy::prelude::*;
use thiserror::Error;

/// Raw text of a PLY-style point cloud. Parsed once settings are known.
#[derive(Asset, TypePath, Debug, Clone)]
pub struct PointCloudSource {
    pub text: String,
}

#[derive(Debug, Error)]
pub enum PlyLoaderError {
    #[error("could not read point cloud file: {0}")]
    Io(#[from] std::io::Error),
    #[error("point cloud file is not UTF-8 text: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Loads `.ply` files as text without interpreting them.
#[derive(Default)]
pub struct PlyTextLoader;

impl AssetLoader for PlyTextLoader {
    type Asset = PointCloudSource;
    type Settings = ();
    type Error = PlyLoaderError;

    async fn load(
        &self,
        reader: &mut dyn Reader,
        _settings: &(),
        load_context: &mut LoadContext<'_>,
    ) -> Result<Self::Asset, Self::Error> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).await?;
        let text = String::from_utf8(bytes)?;
        debug!(
            "Read {} bytes of point cloud text from {}",
            text.len(),
            load_context.path().display()
        );
        Ok(PointCloudSource { text })
    }

    fn extensions(&self) -> &[&str] {
        &["ply"]
    }
}
