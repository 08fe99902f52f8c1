//! In-memory link mapping engine.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::domain::entities::{Link, LinkStats};
use crate::utils::code_generator::{CodeGenerator, HashCodeGenerator, collision_suffix};

/// Forward and reverse maps plus the shortened counter.
///
/// Both maps are only ever written together, under the same write guard.
#[derive(Debug, Default)]
struct LinkTable {
    by_code: HashMap<String, String>,
    by_url: HashMap<String, String>,
    total_shortened: u64,
}

/// Service for creating and resolving short links.
///
/// Holds a bidirectional code/URL mapping guarded by a single reader/writer
/// lock. Shortening the same URL twice returns the same code, and two
/// different URLs never share a code: colliding candidates get a base-62
/// suffix until a free code is found.
///
/// Share one instance across request handlers behind an `Arc`.
pub struct LinkService<G: CodeGenerator = HashCodeGenerator> {
    base_url: String,
    generator: G,
    table: RwLock<LinkTable>,
    total_redirects: AtomicU64,
}

impl LinkService<HashCodeGenerator> {
    /// Creates a service that builds short URLs under `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_generator(base_url, HashCodeGenerator)
    }
}

impl<G: CodeGenerator> LinkService<G> {
    /// Creates a service with a custom candidate code generator.
    pub fn with_generator(base_url: impl Into<String>, generator: G) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            base_url,
            generator,
            table: RwLock::new(LinkTable::default()),
            total_redirects: AtomicU64::new(0),
        }
    }

    /// Base URL prepended to every short code.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Shortens `long_url` and returns the full short URL.
    ///
    /// Idempotent: a URL that is already mapped returns its existing short
    /// URL and leaves the counters untouched.
    ///
    /// The caller is responsible for rejecting empty URLs.
    pub fn shorten(&self, long_url: &str) -> String {
        let link = self.shorten_link(long_url);
        self.short_url(&link.code)
    }

    /// Shortens `long_url` and returns the stored link record.
    ///
    /// # Collisions
    ///
    /// If the candidate code is already taken, suffixes from
    /// [`collision_suffix`] are appended to the original candidate, one per
    /// attempt, until a free code is found. The loop has no attempt cap:
    /// suffixes never repeat and the table is finite, so it always ends.
    pub fn shorten_link(&self, long_url: &str) -> Link {
        let mut table = self.table.write();

        if let Some(code) = table.by_url.get(long_url) {
            return Link::new(code.clone(), long_url);
        }

        let candidate = self.generator.candidate(long_url);
        let mut code = candidate.clone();
        let mut attempt: u64 = 1;

        while table.by_code.contains_key(&code) {
            warn!(candidate = %candidate, attempt, "Short code collision");
            metrics::counter!("link_code_collisions_total").increment(1);

            code = format!("{candidate}{}", collision_suffix(attempt));
            attempt += 1;
        }

        table.by_code.insert(code.clone(), long_url.to_string());
        table.by_url.insert(long_url.to_string(), code.clone());
        table.total_shortened += 1;

        debug!(code = %code, long_url = %long_url, "Created short link");
        metrics::counter!("links_shortened_total").increment(1);

        Link::new(code, long_url)
    }

    /// Looks up the long URL behind `code`.
    ///
    /// Returns `None` for unknown codes. Only hits count as redirects.
    pub fn resolve(&self, code: &str) -> Option<String> {
        let table = self.table.read();
        let long_url = table.by_code.get(code)?.clone();

        self.total_redirects.fetch_add(1, Ordering::Relaxed);
        metrics::counter!("link_redirects_total").increment(1);

        Some(long_url)
    }

    /// Returns a snapshot of the shortened and redirect counters.
    pub fn stats(&self) -> LinkStats {
        let table = self.table.read();

        LinkStats {
            total_shortened: table.total_shortened,
            total_redirects: self.total_redirects.load(Ordering::Relaxed),
        }
    }

    /// Builds the full short URL for `code`.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }

    /// Number of stored links.
    pub fn len(&self) -> usize {
        self.table.read().by_code.len()
    }

    /// Returns `true` if nothing has been shortened yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::code_generator::{ALPHABET, CODE_LENGTH};
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    const BASE_URL: &str = "http://localhost:8080";

    /// Generator that maps every URL to the same candidate.
    struct FixedGenerator(&'static str);

    impl CodeGenerator for FixedGenerator {
        fn candidate(&self, _long_url: &str) -> String {
            self.0.to_string()
        }
    }

    fn code_of(short_url: &str) -> &str {
        short_url
            .strip_prefix(BASE_URL)
            .and_then(|rest| rest.strip_prefix('/'))
            .unwrap()
    }

    #[test]
    fn test_shorten_returns_full_short_url() {
        let service = LinkService::new(BASE_URL);

        let short_url = service.shorten("https://www.google.com");

        assert_eq!(short_url, "http://localhost:8080/cmsScRR");
    }

    #[test]
    fn test_shorten_is_idempotent() {
        let service = LinkService::new(BASE_URL);

        let first = service.shorten("https://www.google.com");
        let second = service.shorten("https://www.google.com");

        assert_eq!(first, second);
        assert_eq!(service.stats().total_shortened, 1);
        assert_eq!(service.len(), 1);
    }

    #[test]
    fn test_round_trip() {
        let service = LinkService::new(BASE_URL);

        let short_url = service.shorten("https://example.com/a/b?c=d");
        let long_url = service.resolve(code_of(&short_url));

        assert_eq!(long_url.as_deref(), Some("https://example.com/a/b?c=d"));
    }

    #[test]
    fn test_resolve_unknown_code() {
        let service = LinkService::new(BASE_URL);
        service.shorten("https://example.com");

        assert!(service.resolve("doesnotexist").is_none());

        let stats = service.stats();
        assert_eq!(stats.total_shortened, 1);
        assert_eq!(stats.total_redirects, 0);
    }

    #[test]
    fn test_counters() {
        let service = LinkService::new(BASE_URL);

        let first = service.shorten("https://example.com/1");
        service.shorten("https://example.com/2");

        assert_eq!(
            service.stats(),
            LinkStats {
                total_shortened: 2,
                total_redirects: 0
            }
        );

        assert!(service.resolve(code_of(&first)).is_some());

        assert_eq!(
            service.stats(),
            LinkStats {
                total_shortened: 2,
                total_redirects: 1
            }
        );
    }

    #[test]
    fn test_distinct_urls_get_distinct_codes() {
        let service = LinkService::new(BASE_URL);

        let codes: HashSet<String> = (0..100)
            .map(|i| service.shorten(&format!("https://example.com/page/{i}")))
            .collect();

        assert_eq!(codes.len(), 100);
        assert_eq!(service.stats().total_shortened, 100);
    }

    #[test]
    fn test_generated_codes_have_expected_shape() {
        let service = LinkService::new(BASE_URL);

        for i in 0..50 {
            let link = service.shorten_link(&format!("https://example.org/{i}"));
            assert_eq!(link.code.len(), CODE_LENGTH);
            assert!(link.code.bytes().all(|b| ALPHABET.contains(&b)));
        }
    }

    #[test]
    fn test_collision_appends_suffix() {
        let service = LinkService::with_generator(BASE_URL, FixedGenerator("aaaaaaa"));

        let first = service.shorten_link("https://one.example");
        let second = service.shorten_link("https://two.example");
        let third = service.shorten_link("https://three.example");

        assert_eq!(first.code, "aaaaaaa");
        assert_eq!(second.code, "aaaaaaa1");
        assert_eq!(third.code, "aaaaaaa2");

        assert_eq!(service.resolve("aaaaaaa").as_deref(), Some("https://one.example"));
        assert_eq!(service.resolve("aaaaaaa1").as_deref(), Some("https://two.example"));
        assert_eq!(service.resolve("aaaaaaa2").as_deref(), Some("https://three.example"));
    }

    #[test]
    fn test_collision_keeps_idempotency() {
        let service = LinkService::with_generator(BASE_URL, FixedGenerator("aaaaaaa"));

        service.shorten("https://one.example");
        let second = service.shorten("https://two.example");
        let again = service.shorten("https://two.example");

        assert_eq!(second, again);
        assert_eq!(service.stats().total_shortened, 2);
    }

    #[test]
    fn test_collision_suffix_grows_past_alphabet() {
        let service = LinkService::with_generator(BASE_URL, FixedGenerator("zzzzzzz"));

        let codes: HashSet<String> = (0..200)
            .map(|i| service.shorten_link(&format!("https://example.com/{i}")).code)
            .collect();

        assert_eq!(codes.len(), 200);
        assert!(codes.contains("zzzzzzzZ"));
        assert!(codes.contains("zzzzzzz10"));
        assert_eq!(service.len(), 200);
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let service = LinkService::new("http://localhost:8080/");

        assert_eq!(service.base_url(), "http://localhost:8080");
        assert_eq!(
            service.shorten("https://www.google.com"),
            "http://localhost:8080/cmsScRR"
        );
    }

    #[test]
    fn test_concurrent_shortening() {
        let service = Arc::new(LinkService::new(BASE_URL));

        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let service = Arc::clone(&service);
                thread::spawn(move || {
                    (0..50)
                        .map(|i| service.shorten(&format!("https://example.com/{worker}/{i}")))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut codes = HashSet::new();
        for handle in handles {
            codes.extend(handle.join().unwrap());
        }

        assert_eq!(codes.len(), 400);
        assert_eq!(service.stats().total_shortened, 400);
        assert_eq!(service.len(), 400);
    }

    #[test]
    fn test_concurrent_same_url_creates_one_mapping() {
        let service = Arc::new(LinkService::with_generator(
            BASE_URL,
            FixedGenerator("sameSam"),
        ));

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let service = Arc::clone(&service);
                thread::spawn(move || service.shorten("https://example.com/shared"))
            })
            .collect();

        let results: HashSet<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(results.len(), 1);
        assert_eq!(service.stats().total_shortened, 1);
    }

    #[test]
    fn test_short_url_for_code() {
        let service = LinkService::new(BASE_URL);

        assert_eq!(service.short_url("abc1234"), "http://localhost:8080/abc1234");
    }

    #[test]
    fn test_service_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LinkService>();
    }
}
