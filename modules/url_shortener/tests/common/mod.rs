//! Common test utilities: in-memory repository, scripted code generator,
//! SQLite-backed fixtures

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use url_shortener::contract::{NewShortUrl, ShortUrl, UrlShortenerError};
use url_shortener::domain::{CodeGenerator, InsertOutcome, ShortUrlRepository};

pub fn print_test_header(test_name: &str, purpose: &[&str]) {
    println!("\n🧪 TEST: {}", test_name);
    if let Some(first) = purpose.first() {
        println!("📋 PURPOSE: {}", first);
    }
    for line in purpose.iter().skip(1) {
        println!("   {}", line);
    }
}

/// In-memory repository enforcing both unique constraints
#[derive(Clone, Default)]
pub struct MockShortUrlRepo {
    rows: Arc<RwLock<Vec<ShortUrl>>>,
    code_lookups: Arc<Mutex<Vec<String>>>,
    inserts: Arc<AtomicUsize>,
}

impl MockShortUrlRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a mapping, bypassing the service
    pub fn seed(&self, original_url: &str, short_code: &str) -> ShortUrl {
        let mut rows = self.rows.write();
        let row = ShortUrl {
            id: rows.len() as i64 + 1,
            original_url: original_url.to_string(),
            short_code: short_code.to_string(),
            created_at: chrono::Utc::now(),
        };
        rows.push(row.clone());
        row
    }

    pub fn insert_count(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }

    pub fn code_lookups(&self) -> Vec<String> {
        self.code_lookups.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.rows.read().len()
    }

    pub fn print_state(&self, context: &str) {
        let rows = self.rows.read();
        println!("\n========== ShortUrlRepository State: {} ==========", context);
        println!("Total mappings: {}", rows.len());
        for row in rows.iter() {
            println!("  #{} {} -> {}", row.id, row.short_code, row.original_url);
        }
        println!("====================================================\n");
    }
}

#[async_trait]
impl ShortUrlRepository for MockShortUrlRepo {
    async fn find_by_original_url(&self, original_url: &str) -> anyhow::Result<Option<ShortUrl>> {
        Ok(self
            .rows
            .read()
            .iter()
            .find(|r| r.original_url == original_url)
            .cloned())
    }

    async fn find_by_short_code(&self, short_code: &str) -> anyhow::Result<Option<ShortUrl>> {
        self.code_lookups.lock().push(short_code.to_string());
        Ok(self
            .rows
            .read()
            .iter()
            .find(|r| r.short_code == short_code)
            .cloned())
    }

    async fn insert(&self, new: NewShortUrl) -> anyhow::Result<InsertOutcome> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.write();
        if rows
            .iter()
            .any(|r| r.original_url == new.original_url || r.short_code == new.short_code)
        {
            return Ok(InsertOutcome::Conflict);
        }
        let row = ShortUrl {
            id: rows.len() as i64 + 1,
            original_url: new.original_url,
            short_code: new.short_code,
            created_at: chrono::Utc::now(),
        };
        rows.push(row.clone());
        Ok(InsertOutcome::Inserted(row))
    }

    async fn count(&self) -> anyhow::Result<u64> {
        Ok(self.rows.read().len() as u64)
    }
}

/// Repository whose every call fails, for internal error paths
pub struct FailingRepo;

#[async_trait]
impl ShortUrlRepository for FailingRepo {
    async fn find_by_original_url(&self, _: &str) -> anyhow::Result<Option<ShortUrl>> {
        anyhow::bail!("connection reset")
    }

    async fn find_by_short_code(&self, _: &str) -> anyhow::Result<Option<ShortUrl>> {
        anyhow::bail!("connection reset")
    }

    async fn insert(&self, _: NewShortUrl) -> anyhow::Result<InsertOutcome> {
        anyhow::bail!("connection reset")
    }

    async fn count(&self) -> anyhow::Result<u64> {
        anyhow::bail!("connection reset")
    }
}

/// Repository where every code looks free but the first `conflicts` inserts
/// are rejected, as when another writer commits between lookup and insert.
/// After the first lookup by URL it reports `winner`, if any.
pub struct RacingRepo {
    winner: Option<ShortUrl>,
    conflicts: usize,
    url_lookups: AtomicUsize,
    inserted_codes: Mutex<Vec<String>>,
}

impl RacingRepo {
    /// The same URL was stored concurrently as `winner`
    pub fn lost_to(winner: ShortUrl) -> Self {
        Self {
            winner: Some(winner),
            conflicts: 1,
            url_lookups: AtomicUsize::new(0),
            inserted_codes: Mutex::new(Vec::new()),
        }
    }

    /// Other URLs grab the first `conflicts` candidate codes
    pub fn codes_taken(conflicts: usize) -> Self {
        Self {
            winner: None,
            conflicts,
            url_lookups: AtomicUsize::new(0),
            inserted_codes: Mutex::new(Vec::new()),
        }
    }

    pub fn url_lookups(&self) -> usize {
        self.url_lookups.load(Ordering::SeqCst)
    }

    pub fn inserted_codes(&self) -> Vec<String> {
        self.inserted_codes.lock().clone()
    }
}

#[async_trait]
impl ShortUrlRepository for RacingRepo {
    async fn find_by_original_url(&self, _: &str) -> anyhow::Result<Option<ShortUrl>> {
        let previous = self.url_lookups.fetch_add(1, Ordering::SeqCst);
        Ok(if previous == 0 { None } else { self.winner.clone() })
    }

    async fn find_by_short_code(&self, _: &str) -> anyhow::Result<Option<ShortUrl>> {
        Ok(None)
    }

    async fn insert(&self, new: NewShortUrl) -> anyhow::Result<InsertOutcome> {
        let mut codes = self.inserted_codes.lock();
        codes.push(new.short_code.clone());
        if codes.len() <= self.conflicts {
            return Ok(InsertOutcome::Conflict);
        }
        Ok(InsertOutcome::Inserted(ShortUrl {
            id: codes.len() as i64,
            original_url: new.original_url,
            short_code: new.short_code,
            created_at: chrono::Utc::now(),
        }))
    }

    async fn count(&self) -> anyhow::Result<u64> {
        Ok(0)
    }
}

/// Returns queued codes in order, then repeats `fallback`; records seeds
pub struct ScriptedGenerator {
    codes: Mutex<VecDeque<String>>,
    fallback: String,
    seeds: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn new(codes: &[&str], fallback: &str) -> Self {
        Self {
            codes: Mutex::new(codes.iter().map(|c| c.to_string()).collect()),
            fallback: fallback.to_string(),
            seeds: Mutex::new(Vec::new()),
        }
    }

    /// Always returns the same code
    pub fn constant(code: &str) -> Self {
        Self::new(&[], code)
    }

    pub fn seeds(&self) -> Vec<String> {
        self.seeds.lock().clone()
    }
}

impl CodeGenerator for ScriptedGenerator {
    fn generate(&self, seed: &str) -> Result<String, UrlShortenerError> {
        self.seeds.lock().push(seed.to_string());
        Ok(self
            .codes
            .lock()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone()))
    }
}

/// Fresh in-memory SQLite database with migrations applied
pub async fn sqlite_db() -> sea_orm::DatabaseConnection {
    let db = url_shortener::infra::storage::connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory SQLite");
    url_shortener::UrlShortenerModule::migrate(&db)
        .await
        .expect("Failed to run migrations");
    db
}
