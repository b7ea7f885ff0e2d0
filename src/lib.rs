pub use girder_core::*;
