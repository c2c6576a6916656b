//! Input cache for storing puzzle inputs locally

use crate::error::CacheError;
use aoc_http_client::{AocClient, InputRequest, PuzzleKey};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File name of a cached input inside its puzzle directory
const INPUT_FILE_NAME: &str = "input.txt";

/// File-based cache for puzzle inputs
///
/// Directory structure: `{root}/{year}/{day}/input.txt`
///
/// Entries are never invalidated; they are only deleted through
/// [`InputCache::remove`]. There is no locking, so two processes missing the
/// same entry both download it and the last write wins.
#[derive(Debug, Clone)]
pub struct InputCache {
    root: PathBuf,
}

impl InputCache {
    /// Create a cache rooted at the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the cache root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the cache path for a specific puzzle
    pub fn cache_path(&self, key: PuzzleKey) -> PathBuf {
        self.puzzle_dir(key).join(INPUT_FILE_NAME)
    }

    fn puzzle_dir(&self, key: PuzzleKey) -> PathBuf {
        self.root
            .join(key.year.to_string())
            .join(key.day.to_string())
    }

    /// Check if input is cached
    pub fn contains(&self, key: PuzzleKey) -> bool {
        self.cache_path(key).is_file()
    }

    /// Get cached input or None if not cached
    ///
    /// An empty file is a cached (empty) input, not a miss.
    pub fn get(&self, key: PuzzleKey) -> Result<Option<Vec<u8>>, CacheError> {
        let path = self.cache_path(key);
        match fs::read(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(CacheError::Read { path, source }),
        }
    }

    /// Store input in cache
    pub fn put(&self, key: PuzzleKey, input: &[u8]) -> Result<(), CacheError> {
        let dir = self.puzzle_dir(key);
        fs::create_dir_all(&dir).map_err(|source| CacheError::Write {
            path: dir.clone(),
            source,
        })?;

        let path = dir.join(INPUT_FILE_NAME);
        fs::write(&path, input).map_err(|source| CacheError::Write { path, source })
    }

    /// Delete the cached input for a puzzle
    ///
    /// Returns whether a file was removed. A missing entry is not an error.
    pub fn remove(&self, key: PuzzleKey) -> Result<bool, CacheError> {
        let path = self.cache_path(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(source) => Err(CacheError::Remove { path, source }),
        }
    }

    /// Return the input for a puzzle, downloading and caching it on a miss
    ///
    /// A cached file is returned verbatim without touching the network. On a
    /// miss the input is downloaded once (any non-200 status is an error, no
    /// retry), written to the cache, and returned.
    pub fn fetch(&self, client: &AocClient, request: &InputRequest) -> Result<Vec<u8>, CacheError> {
        let key = request.key();
        if let Some(input) = self.get(key)? {
            tracing::debug!(puzzle = %key, bytes = input.len(), "input cache hit");
            return Ok(input);
        }

        tracing::debug!(puzzle = %key, "input cache miss");
        let input = client
            .get_input(request)
            .map_err(|source| CacheError::Fetch { key, source })?;

        self.put(key, &input)?;
        tracing::debug!(
            puzzle = %key,
            path = %self.cache_path(key).display(),
            "cached puzzle input"
        );

        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_http_client::{AocError, AocRequest};
    use proptest::prelude::*;
    use tempfile::TempDir;

    fn mock_client(server: &mockito::Server) -> AocClient {
        AocClient::builder()
            .base_url(server.url())
            .unwrap()
            .build()
            .unwrap()
    }

    #[test]
    fn test_cache_path_format() {
        let temp = TempDir::new().unwrap();
        let cache = InputCache::new(temp.path());
        assert_eq!(cache.root(), temp.path());

        assert_eq!(
            cache.cache_path(PuzzleKey::new(2024, 1)),
            temp.path().join("2024").join("1").join("input.txt")
        );
        assert_eq!(
            cache.cache_path(PuzzleKey::new(2023, 25)),
            temp.path().join("2023").join("25").join("input.txt")
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(20))]

        #[test]
        fn prop_cache_paths_are_distinct_per_key(
            a in (2015u16..2030u16, 1u8..=25u8),
            b in (2015u16..2030u16, 1u8..=25u8),
        ) {
            let cache = InputCache::new("/cache-root");
            let path_a = cache.cache_path(PuzzleKey::new(a.0, a.1));
            let path_b = cache.cache_path(PuzzleKey::new(b.0, b.1));
            prop_assert_eq!(a == b, path_a == path_b);
            prop_assert!(path_a.starts_with("/cache-root"));
        }
    }

    #[test]
    fn test_cache_roundtrip() {
        let temp = TempDir::new().unwrap();
        let cache = InputCache::new(temp.path());
        let key = PuzzleKey::new(2024, 1);

        // Initially not cached
        assert!(!cache.contains(key));
        assert!(cache.get(key).unwrap().is_none());

        // Store input
        let input = b"test input\nline 2\n";
        cache.put(key, input).unwrap();

        // Now cached
        assert!(cache.contains(key));
        assert_eq!(cache.get(key).unwrap(), Some(input.to_vec()));
    }

    #[test]
    fn test_remove() {
        let temp = TempDir::new().unwrap();
        let cache = InputCache::new(temp.path());
        let key = PuzzleKey::new(2015, 7);

        assert!(!cache.remove(key).unwrap());

        cache.put(key, b"data").unwrap();
        assert!(cache.remove(key).unwrap());
        assert!(!cache.contains(key));
    }

    #[test]
    fn test_read_error_is_tagged() {
        let temp = TempDir::new().unwrap();
        let cache = InputCache::new(temp.path());
        let key = PuzzleKey::new(2015, 7);

        // A directory where the file should be makes the read fail
        fs::create_dir_all(cache.cache_path(key)).unwrap();

        assert!(matches!(cache.get(key), Err(CacheError::Read { .. })));
    }

    #[test]
    fn test_write_error_is_tagged() {
        let temp = TempDir::new().unwrap();
        // Root is a regular file, so the directory tree cannot be created
        let root = temp.path().join("not-a-dir");
        fs::write(&root, b"").unwrap();
        let cache = InputCache::new(&root);

        let result = cache.put(PuzzleKey::new(2015, 7), b"data");
        assert!(matches!(result, Err(CacheError::Write { .. })));
    }

    #[test]
    fn test_fetch_miss_then_hit() {
        let temp = TempDir::new().unwrap();
        let cache = InputCache::new(temp.path());
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/2015/day/7/input")
            .match_header("cookie", "session=foo")
            .with_status(200)
            .with_body("puzzle data")
            .expect(1)
            .create();

        let client = mock_client(&server);
        let request = AocRequest::new(2015, 7)
            .with_session_key("foo")
            .build_input_request();

        assert_eq!(cache.fetch(&client, &request).unwrap(), b"puzzle data");
        assert_eq!(
            fs::read(cache.cache_path(request.key())).unwrap(),
            b"puzzle data"
        );

        // Second fetch is served from disk
        assert_eq!(cache.fetch(&client, &request).unwrap(), b"puzzle data");
        mock.assert();
    }

    #[test]
    fn test_fetch_empty_cached_file_is_a_hit() {
        let temp = TempDir::new().unwrap();
        let cache = InputCache::new(temp.path());
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/2015/day/7/input")
            .with_status(200)
            .with_body("should not be fetched")
            .expect(0)
            .create();

        let key = PuzzleKey::new(2015, 7);
        cache.put(key, b"").unwrap();

        let client = mock_client(&server);
        let request = AocRequest::for_key(key)
            .with_session_key("foo")
            .build_input_request();

        assert_eq!(cache.fetch(&client, &request).unwrap(), Vec::<u8>::new());
        mock.assert();
    }

    #[test]
    fn test_fetch_hit_needs_no_session() {
        let temp = TempDir::new().unwrap();
        let cache = InputCache::new(temp.path());
        let server = mockito::Server::new();
        let key = PuzzleKey::new(2015, 7);
        cache.put(key, b"cached").unwrap();

        let request = AocRequest::for_key(key)
            .with_session_key("")
            .build_input_request();

        assert_eq!(
            cache.fetch(&mock_client(&server), &request).unwrap(),
            b"cached"
        );
    }

    #[test]
    fn test_fetch_non_ok_status_is_not_cached() {
        let temp = TempDir::new().unwrap();
        let cache = InputCache::new(temp.path());
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/2015/day/7/input")
            .with_status(404)
            .with_body("Please don't repeatedly request this endpoint before it unlocks!")
            .expect(1)
            .create();

        let client = mock_client(&server);
        let request = AocRequest::new(2015, 7)
            .with_session_key("foo")
            .build_input_request();

        match cache.fetch(&client, &request) {
            Err(CacheError::Fetch {
                key,
                source: AocError::InvalidStatus { status },
            }) => {
                assert_eq!(key, PuzzleKey::new(2015, 7));
                assert_eq!(status.as_u16(), 404);
            }
            other => panic!("Expected Fetch error, got {:?}", other),
        }
        assert!(!cache.contains(request.key()));
        mock.assert();
    }

    #[test]
    fn test_fetch_missing_session_is_fetch_error() {
        let temp = TempDir::new().unwrap();
        let cache = InputCache::new(temp.path());
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/2015/day/7/input")
            .expect(0)
            .create();

        let request = AocRequest::new(2015, 7)
            .with_session_key("")
            .build_input_request();

        let result = cache.fetch(&mock_client(&server), &request);
        assert!(matches!(
            result,
            Err(CacheError::Fetch {
                source: AocError::MissingSession(_),
                ..
            })
        ));
        mock.assert();
    }
}
