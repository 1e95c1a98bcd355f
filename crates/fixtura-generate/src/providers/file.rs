use rand_chacha::ChaCha8Rng;
use serde_json::json;

use fixtura_core::Result;

use crate::intd::{
    EXTENSIONS_AUDIO, EXTENSIONS_COMPRESSED, EXTENSIONS_DATA, EXTENSIONS_EXECUTABLE,
    EXTENSIONS_IMAGE, EXTENSIONS_SOURCE, EXTENSIONS_TEXT, EXTENSIONS_VIDEO, MIME_TYPES,
};
use crate::providers::options::FileType;
use crate::providers::{Field, field_table_provider, pick_from, seeded_rng};

/// File extensions and MIME types.
#[derive(Debug)]
pub struct File {
    rng: ChaCha8Rng,
}

impl File {
    pub const NAME: &'static str = "file";

    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: seeded_rng(seed, Self::NAME),
        }
    }

    /// Extension with its leading dot, e.g. `.rs` for [`FileType::Source`].
    pub fn extension(&mut self, file_type: FileType) -> Result<String> {
        let table = match file_type {
            FileType::Source => EXTENSIONS_SOURCE,
            FileType::Text => EXTENSIONS_TEXT,
            FileType::Data => EXTENSIONS_DATA,
            FileType::Audio => EXTENSIONS_AUDIO,
            FileType::Video => EXTENSIONS_VIDEO,
            FileType::Image => EXTENSIONS_IMAGE,
            FileType::Executable => EXTENSIONS_EXECUTABLE,
            FileType::Compressed => EXTENSIONS_COMPRESSED,
        };
        pick_from(table, &mut self.rng)
    }

    pub fn mime_type(&mut self) -> Result<String> {
        pick_from(MIME_TYPES, &mut self.rng)
    }
}

impl Default for File {
    fn default() -> Self {
        Self::new(None)
    }
}

const FIELDS: &[Field<File>] = &[
    Field::new("extension", |p| Ok(json!(p.extension(FileType::default())?))),
    Field::new("mime_type", |p| Ok(json!(p.mime_type()?))),
];

field_table_provider!(File, FIELDS);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extensions_follow_file_type() {
        let mut file = File::new(Some(5));
        for _ in 0..10 {
            let extension = file.extension(FileType::Source).expect("extension");
            assert!(EXTENSIONS_SOURCE.contains(&extension.as_str()));
        }
        let compressed = file.extension(FileType::Compressed).expect("extension");
        assert!(compressed.starts_with('.'));
        assert!(file.mime_type().expect("mime").contains('/'));
    }
}
