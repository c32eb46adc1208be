//! Ordered project catalog
//!
//! Insertion order is display order. Ids are unique and titles non-blank;
//! both are checked whenever a catalog is built.

use std::collections::HashSet;
use std::path::Path;

use crate::error::{GalleryError, GalleryResult};
use crate::types::{LayoutVariant, MediaVariant, ProjectId, ProjectRecord, ProjectSize};

/// The fixed ordered list of project records shown by the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    records: Vec<ProjectRecord>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and blank titles.
    pub fn new(records: Vec<ProjectRecord>) -> GalleryResult<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(GalleryError::DuplicateId(record.id));
            }
            if record.title.trim().is_empty() {
                return Err(GalleryError::InvalidRecord {
                    id: record.id,
                    reason: "title is blank".to_string(),
                });
            }
        }
        Ok(Self { records })
    }

    /// Parse a catalog from a JSON array of records.
    pub fn from_json_str(json: &str) -> GalleryResult<Self> {
        let records: Vec<ProjectRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    /// Read and parse a catalog file.
    pub fn load(path: impl AsRef<Path>) -> GalleryResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        tracing::info!(path = %path.display(), projects = catalog.len(), "Loaded catalog");
        Ok(catalog)
    }

    /// Serialize back to pretty JSON (same shape `from_json_str` accepts).
    pub fn to_json_pretty(&self) -> GalleryResult<String> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }

    pub fn get(&self, id: ProjectId) -> Option<&ProjectRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: ProjectId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProjectRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The built-in catalog: three projects and one academic credential.
    pub fn reference() -> Self {
        let records = vec![
            ProjectRecord {
                id: ProjectId(1),
                title: "Algorithmic Trading Engine".to_string(),
                subtitle: "Review C++ Architecture".to_string(),
                description: "Sub-microsecond latency execution system designed for HFT markets."
                    .to_string(),
                long_description: "A high-performance trading engine built in C++20 focusing on \
                    zero-copy network processing and lock-free data structures. Implements genetic \
                    algorithms in Python for strategy optimization before deployment."
                    .to_string(),
                tags: strings(&["C++", "Python", "Genetic Algos"]),
                size: ProjectSize::Large,
                stats: "Latency: 400ns | Uptime: 99.999%".to_string(),
                features: strings(&[
                    "Kernel bypass networking (DPDK)",
                    "Shared memory ring buffers",
                    "SIMD optimized matching engine",
                ]),
                layout: LayoutVariant::Standard,
                media: MediaVariant::TerminalSim {
                    lines: strings(&[
                        "initializing execution engine...",
                        "optimizating routing tables... DONE",
                        "connecting to market data feed... CONNECTED",
                        "latency check: 400ns... OK",
                    ]),
                },
                primary_action_label: "View Source".to_string(),
                secondary_action_label: "Case Study".to_string(),
            },
            ProjectRecord {
                id: ProjectId(2),
                title: "Zombie Mod 5".to_string(),
                subtitle: "View Gameplay & Stats".to_string(),
                description: "200k+ Active Users.".to_string(),
                long_description: "A massive multiplayer mod demonstrating the capacity to handle \
                    high concurrency and complex state synchronization. Managed community servers \
                    and orchestrated deployment pipelines."
                    .to_string(),
                tags: strings(&["Game Dev", "Lua"]),
                size: ProjectSize::Medium,
                stats: "200k Users | 500+ Servers".to_string(),
                features: strings(&[
                    "Lag compensation networking",
                    "Entity component system architecture",
                    "Automated anti-cheat heuristics",
                ]),
                layout: LayoutVariant::Standard,
                media: MediaVariant::VideoPlaceholder,
                primary_action_label: "Download Mod".to_string(),
                secondary_action_label: "Case Study".to_string(),
            },
            ProjectRecord {
                id: ProjectId(3),
                title: "WASM Engine".to_string(),
                subtitle: "Run in Browser".to_string(),
                description: "C++ Game Engine on Web.".to_string(),
                long_description: "Porting a custom C++ game engine to WebAssembly to demonstrate \
                    native performance in the browser. Handles WebGL rendering and multi-threaded \
                    physics."
                    .to_string(),
                tags: strings(&["C++", "WASM", "WebGL"]),
                size: ProjectSize::Small,
                stats: "60 FPS @ 4K | <5MB Binary".to_string(),
                features: strings(&[
                    "Emscripten toolchain optimization",
                    "WebGL 2.0 renderer backend",
                    "Asset streaming system",
                ]),
                layout: LayoutVariant::Standard,
                media: MediaVariant::TitleCard,
                primary_action_label: "View Source".to_string(),
                secondary_action_label: "Case Study".to_string(),
            },
            ProjectRecord {
                id: ProjectId(4),
                title: "MSc in Engineering".to_string(),
                subtitle: "View Thesis Details".to_string(),
                description: "Specialization in Systems Engineering.".to_string(),
                long_description: "Focusing on the intersection of biological computing (Genetic \
                    Algorithms) and financial market efficiency. Thesis explores fuzzy logic \
                    applications in high-frequency order routing."
                    .to_string(),
                tags: strings(&["Research", "HFT"]),
                size: ProjectSize::Large,
                stats: "Thesis Phase | Candidate".to_string(),
                features: strings(&[
                    "Genetic Algorithms Application",
                    "Fuzzy Logic Control Systems",
                    "Market Microstructure Analysis",
                ]),
                layout: LayoutVariant::Academic {
                    institution: "Universidad Tecnol\u{f3}gica Nacional".to_string(),
                    badge: "Thesis Phase".to_string(),
                    focus: "Genetic Algorithms".to_string(),
                    watermark: "MSc".to_string(),
                },
                media: MediaVariant::TitleCard,
                primary_action_label: "View Source".to_string(),
                secondary_action_label: "Case Study".to_string(),
            },
        ];

        Self { records }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ProjectRecord;
    type IntoIter = std::slice::Iter<'a, ProjectRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_catalog_is_valid() {
        let reference = Catalog::reference();
        let rebuilt = Catalog::new(reference.records().to_vec()).unwrap();
        assert_eq!(rebuilt, reference);
        assert_eq!(reference.len(), 4);
    }

    #[test]
    fn test_reference_order_is_display_order() {
        let ids: Vec<u32> = Catalog::reference().iter().map(|r| r.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_reference_variants_replace_id_checks() {
        let catalog = Catalog::reference();

        let academic: Vec<_> = catalog.iter().filter(|r| r.layout.is_academic()).collect();
        assert_eq!(academic.len(), 1);
        assert_eq!(academic[0].title, "MSc in Engineering");

        let downloads: Vec<_> = catalog
            .iter()
            .filter(|r| r.primary_action_label == "Download Mod")
            .collect();
        assert_eq!(downloads.len(), 1);
        assert_eq!(downloads[0].media, MediaVariant::VideoPlaceholder);

        assert!(matches!(
            catalog.get(ProjectId(1)).unwrap().media,
            MediaVariant::TerminalSim { ref lines } if lines.len() == 4
        ));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut records = Catalog::reference().records().to_vec();
        records[2].id = ProjectId(1);
        let err = Catalog::new(records).unwrap_err();
        assert!(matches!(err, GalleryError::DuplicateId(ProjectId(1))));
    }

    #[test]
    fn test_blank_title_rejected() {
        let mut records = Catalog::reference().records().to_vec();
        records[1].title = "   ".to_string();
        let err = Catalog::new(records).unwrap_err();
        assert!(matches!(err, GalleryError::InvalidRecord { id: ProjectId(2), .. }));
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let catalog = Catalog::from_json_str("[]").unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.get(ProjectId(1)).is_none());
    }

    #[test]
    fn test_json_matches_reference() {
        let reference = Catalog::reference();
        let json = reference.to_json_pretty().unwrap();
        let parsed = Catalog::from_json_str(&json).unwrap();
        assert_eq!(parsed, reference);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = Catalog::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, GalleryError::Parse(_)));
    }
}
