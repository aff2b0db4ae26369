//! On-disk JSON cache shared by the release index, update check and
//! global settings.

pub mod store;

pub use store::CacheStore;

/// Get the default cache directory (`~/.autonode`).
pub fn default_cache_dir() -> std::path::PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join(".autonode")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cache_dir_valid() {
        let path = default_cache_dir();
        assert!(path.ends_with(".autonode"));
    }
}
