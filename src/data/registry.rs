//! Startup-loaded registry of the required datasets. Load once, share via
//! Arc across the server and CLI. Detail records and topical tables stay on
//! disk and are read per request; there is no shared cache to invalidate.

use std::collections::HashMap;
use std::sync::Arc;

use crate::data::court::{
    load_court_index, load_court_record, CourtIndex, CourtIndexEntry, CourtRecord,
};
use crate::data::judge::{
    load_judge_index, load_judge_record, JudgeIndex, JudgeIndexEntry, JudgeRecord,
};
use crate::data::loader::{DataError, DataRoot};
use crate::data::lookup::index_by_owned;
use crate::data::nationality::{
    load_nationality_index, load_nationality_record, NationalityIndex, NationalityIndexEntry,
    NationalityRecord,
};
use crate::data::stats::{load_stats, StatsSummary};

/// Read-only registry of the datasets every page needs. The three indexes
/// and the stats summary are required; their absence is a startup failure.
#[derive(Debug)]
pub struct DataRegistry {
    root: DataRoot,
    pub stats: StatsSummary,
    pub nationality_index: NationalityIndex,
    pub court_index: CourtIndex,
    pub judge_index: JudgeIndex,
    nationalities_by_code: HashMap<String, NationalityIndexEntry>,
    nationalities_by_slug: HashMap<String, NationalityIndexEntry>,
    courts_by_code: HashMap<String, CourtIndexEntry>,
    courts_by_slug: HashMap<String, CourtIndexEntry>,
    judges_by_slug: HashMap<String, JudgeIndexEntry>,
}

impl DataRegistry {
    /// Load all required datasets from the root. Returns an Arc so the
    /// registry can be shared across request handlers.
    pub fn load(root: DataRoot) -> Result<Arc<DataRegistry>, DataError> {
        let stats = load_stats(&root)?;
        let nationality_index = load_nationality_index(&root)?;
        let court_index = load_court_index(&root)?;
        let judge_index = load_judge_index(&root)?;

        let nationalities_by_code =
            index_by_owned(&nationality_index.nationalities, |e| e.code.clone());
        let nationalities_by_slug =
            index_by_owned(&nationality_index.nationalities, |e| e.slug.clone());
        let courts_by_code = index_by_owned(&court_index.courts, |e| e.code.clone());
        let courts_by_slug = index_by_owned(&court_index.courts, |e| e.slug.clone());
        let judges_by_slug = index_by_owned(&judge_index.judges, |e| e.slug.clone());

        log::info!(
            "data registry loaded from {}: {} nationalities, {} courts, {} judges",
            root.path().display(),
            nationality_index.nationalities.len(),
            court_index.courts.len(),
            judge_index.judges.len()
        );

        Ok(Arc::new(DataRegistry {
            root,
            stats,
            nationality_index,
            court_index,
            judge_index,
            nationalities_by_code,
            nationalities_by_slug,
            courts_by_code,
            courts_by_slug,
            judges_by_slug,
        }))
    }

    pub fn root(&self) -> &DataRoot {
        &self.root
    }

    pub fn nationality_by_code(&self, code: &str) -> Option<&NationalityIndexEntry> {
        self.nationalities_by_code.get(code)
    }

    pub fn nationality_by_slug(&self, slug: &str) -> Option<&NationalityIndexEntry> {
        self.nationalities_by_slug.get(slug)
    }

    pub fn court_by_code(&self, code: &str) -> Option<&CourtIndexEntry> {
        self.courts_by_code.get(code)
    }

    pub fn court_by_slug(&self, slug: &str) -> Option<&CourtIndexEntry> {
        self.courts_by_slug.get(slug)
    }

    pub fn judge_by_slug(&self, slug: &str) -> Option<&JudgeIndexEntry> {
        self.judges_by_slug.get(slug)
    }

    /// Resolve a nationality page by slug. The detail file on disk decides
    /// whether the page exists.
    pub fn resolve_nationality(&self, slug: &str) -> Result<Option<NationalityRecord>, DataError> {
        load_nationality_record(&self.root, slug)
    }

    pub fn resolve_court(&self, slug: &str) -> Result<Option<CourtRecord>, DataError> {
        load_court_record(&self.root, slug)
    }

    pub fn resolve_judge(&self, slug: &str) -> Result<Option<JudgeRecord>, DataError> {
        load_judge_record(&self.root, slug)
    }
}
