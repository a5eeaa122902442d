use crate::error::{HoloError, Result};
use crate::geometry::TargetSet;
use crate::tracer::ShapeConstruction;
use fnv::FnvHashMap;

/// Named custom formations: uploads, saved designs, locked constructions.
/// Storage beyond the process lifetime is the caller's concern.
#[derive(Clone, Debug, Default)]
pub struct TargetLibrary {
    entries: FnvHashMap<String, TargetSet>,
}

impl TargetLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `set` under `name`, returning the entry it replaced.
    pub fn insert(&mut self, name: impl Into<String>, set: TargetSet) -> Result<Option<TargetSet>> {
        if set.is_empty() {
            return Err(HoloError::EmptyTargetSet);
        }
        let name = name.into();
        log::debug!("[library] stored '{}' ({} points)", name, set.len());
        Ok(self.entries.insert(name, set))
    }

    /// Save a locked construction resampled to `count` points.
    pub fn save_construction(
        &mut self,
        name: impl Into<String>,
        construction: &ShapeConstruction,
        count: usize,
    ) -> Result<()> {
        if !construction.is_locked() {
            return Err(HoloError::InvalidParams("construction is not locked"));
        }
        let set = construction.to_target_set(count)?;
        self.insert(name, set).map(|_| ())
    }

    pub fn get(&self, name: &str) -> Option<&TargetSet> {
        self.entries.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<TargetSet> {
        self.entries.remove(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracer::{TracePhase, TracePoint};
    use glam::Vec3;

    #[test]
    fn insert_get_remove() {
        let mut lib = TargetLibrary::new();
        let set = TargetSet::new(vec![Vec3::ONE]);
        assert_eq!(lib.insert("star", set.clone()), Ok(None));
        assert_eq!(lib.insert("star", set.clone()), Ok(Some(set.clone())));
        assert_eq!(lib.insert("blank", TargetSet::default()), Err(HoloError::EmptyTargetSet));
        lib.insert("arc", set.clone()).unwrap();
        assert_eq!(lib.names(), vec!["arc", "star"]);
        assert_eq!(lib.get("star"), Some(&set));
        assert!(lib.remove("star").is_some());
        assert_eq!(lib.len(), 1);
    }

    #[test]
    fn only_locked_constructions_are_saved() {
        let mut c = ShapeConstruction {
            phase: TracePhase::Tracing,
            path: vec![
                TracePoint {
                    position: Vec3::ZERO,
                    timestamp_ms: 0,
                },
                TracePoint {
                    position: Vec3::X,
                    timestamp_ms: 10,
                },
            ],
            bounds: None,
            density: 0.3,
        };
        let mut lib = TargetLibrary::new();
        assert!(lib.save_construction("line", &c, 10).is_err());
        c.phase = TracePhase::Locked;
        lib.save_construction("line", &c, 10).unwrap();
        assert_eq!(lib.get("line").map(TargetSet::len), Some(10));
    }
}
