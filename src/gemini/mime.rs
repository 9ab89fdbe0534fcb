//! Content type detection based on file extensions.
//!
//! Configured associations take precedence over the `mime_guess` defaults.

use std::collections::HashMap;

/// Extension to content type lookup, built once at startup.
#[derive(Debug, Clone, Default)]
pub struct MimeRegistry {
    overrides: HashMap<String, String>,
}

impl MimeRegistry {
    /// Builds a registry from a `content type -> [extension]` table.
    ///
    /// Extensions may be written with or without a leading dot and are
    /// matched case-insensitively.
    pub fn new(types: &HashMap<String, Vec<String>>) -> Self {
        let mut overrides = HashMap::new();
        for (mime_type, extensions) in types {
            for ext in extensions {
                overrides.insert(normalize(ext), mime_type.clone());
            }
        }
        Self { overrides }
    }

    /// Returns the content type for `filename`, or `None` when its extension
    /// is unknown or missing.
    ///
    /// # Example
    ///
    /// ```
    /// # use gemserve::gemini::mime::MimeRegistry;
    /// let registry = MimeRegistry::default();
    /// assert_eq!(registry.classify("notes.txt").as_deref(), Some("text/plain"));
    /// assert_eq!(registry.classify("README"), None);
    /// ```
    pub fn classify(&self, filename: &str) -> Option<String> {
        let ext = extension(filename)?;
        if let Some(mime_type) = self.overrides.get(&ext) {
            return Some(mime_type.clone());
        }
        mime_guess::from_ext(&ext).first_raw().map(str::to_string)
    }
}

fn normalize(ext: &str) -> String {
    ext.trim_start_matches('.').to_ascii_lowercase()
}

fn extension(filename: &str) -> Option<String> {
    let (stem, ext) = filename.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> MimeRegistry {
        let mut types = HashMap::new();
        types.insert(
            "text/gemini".to_string(),
            vec![".gmi".to_string(), "gemini".to_string()],
        );
        types.insert("text/x-custom".to_string(), vec![".TXT".to_string()]);
        MimeRegistry::new(&types)
    }

    #[test]
    fn configured_types_take_precedence() {
        let registry = registry();
        assert_eq!(registry.classify("a.txt").as_deref(), Some("text/x-custom"));
        assert_eq!(registry.classify("page.gmi").as_deref(), Some("text/gemini"));
        assert_eq!(registry.classify("page.gemini").as_deref(), Some("text/gemini"));
    }

    #[test]
    fn falls_back_to_system_defaults() {
        let registry = registry();
        assert_eq!(registry.classify("photo.png").as_deref(), Some("image/png"));
        assert_eq!(registry.classify("PHOTO.PNG").as_deref(), Some("image/png"));
    }

    #[test]
    fn unknown_or_missing_extension() {
        let registry = registry();
        assert_eq!(registry.classify("data.nosuchext"), None);
        assert_eq!(registry.classify("Makefile"), None);
        assert_eq!(registry.classify(".hidden"), None);
        assert_eq!(registry.classify("trailing."), None);
    }
}
