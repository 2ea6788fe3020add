use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum EpipolarError {
    #[error("Image at path '{0}' could not be loaded: file does not exist")]
    ImageNotFound(PathBuf),

    #[error("Image at path '{path}' could not be loaded. {source}")]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image_rs::ImageError
    },

    #[error("Expected a 3x3 fundamental matrix or an Nx2 point matrix, got {rows}x{cols}")]
    MatrixDimension { rows: usize, cols: usize },

    #[error("Point file '{path}' failed. {reason}")]
    PointFile { path: PathBuf, reason: String },

    #[error("Runtime configuration is invalid. {0}")]
    Config(String),

    #[error("Plotting failed. {0}")]
    Plot(String),

    #[error("Figure could not be saved to '{path}'. {source}")]
    FigureSave {
        path: PathBuf,
        #[source]
        source: image_rs::ImageError
    },

    #[error("Window failed. {0}")]
    Window(String)
}
