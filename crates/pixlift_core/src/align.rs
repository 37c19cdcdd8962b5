use crate::entry::FileEntry;
use crate::error::{CoreError, Result};

/// One matched (original, downscaled) couple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    pub original: FileEntry,
    pub downscaled: FileEntry,
}

/// Two-cursor scan pairing each downscaled entry with an original entry.
///
/// Both listings must be sorted lexicographically by filename; the scan
/// assumes sorted order aligns corresponding pairs monotonically. The
/// original-side cursor only ever moves forward, and it stays in place
/// across a successful match so that several downscaled entries sharing a
/// stem prefix with one original can all pair against it.
///
/// The scan is an iterator over `Result<Pair>` on purpose: a match
/// failure for a later entry surfaces only once the earlier pairs have
/// already been consumed (and their restored files written).
#[derive(Debug)]
pub struct AlignmentScan {
    originals: Vec<FileEntry>,
    downscaled: Vec<FileEntry>,
    orig_idx: usize,
    down_idx: usize,
}

impl AlignmentScan {
    /// Builds the scan, checking the count precondition up front: every
    /// downscaled entry needs a corresponding-or-earlier original, so
    /// `originals` may never be the shorter list.
    pub fn new(originals: Vec<FileEntry>, downscaled: Vec<FileEntry>) -> Result<Self> {
        if originals.len() < downscaled.len() {
            return Err(CoreError::InsufficientOriginals {
                originals: originals.len(),
                downscaled: downscaled.len(),
            });
        }
        Ok(Self {
            originals,
            downscaled,
            orig_idx: 0,
            down_idx: 0,
        })
    }

    /// Total number of downscaled entries this scan will try to pair.
    #[must_use]
    pub fn total(&self) -> usize {
        self.downscaled.len()
    }
}

impl Iterator for AlignmentScan {
    type Item = Result<Pair>;

    fn next(&mut self) -> Option<Self::Item> {
        let down = self.downscaled.get(self.down_idx)?.clone();
        loop {
            match self.originals.get(self.orig_idx) {
                Some(orig) if orig.stems_related(&down) => {
                    self.down_idx += 1;
                    return Some(Ok(Pair {
                        original: orig.clone(),
                        downscaled: down,
                    }));
                }
                Some(_) => self.orig_idx += 1,
                None => {
                    // Fuse: a failed scan yields nothing further.
                    self.down_idx = self.downscaled.len();
                    return Some(Err(CoreError::NoMatchFound {
                        file_name: down.file_name().to_string(),
                    }));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn entries(names: &[&str]) -> Vec<FileEntry> {
        names.iter().map(|name| FileEntry::new(*name)).collect()
    }

    fn pairs(scan: AlignmentScan) -> Vec<(String, String)> {
        scan.map(|pair| {
            let pair = pair.unwrap();
            (
                pair.original.file_name().to_string(),
                pair.downscaled.file_name().to_string(),
            )
        })
        .collect()
    }

    #[test]
    fn test_suffixed_stems_pair_in_order() {
        let scan = AlignmentScan::new(
            entries(&["img001.png", "img002.png"]),
            entries(&["img001_small.png", "img002_small.png"]),
        )
        .unwrap();

        assert_eq!(
            pairs(scan),
            [
                ("img001.png".to_string(), "img001_small.png".to_string()),
                ("img002.png".to_string(), "img002_small.png".to_string()),
            ]
        );
    }

    #[test]
    fn test_more_downscaled_than_originals_fails_upfront() {
        let err = AlignmentScan::new(entries(&["a.png"]), entries(&["a.png", "b.png"])).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InsufficientOriginals {
                originals: 1,
                downscaled: 2,
            }
        ));
    }

    #[test]
    fn test_no_match_names_the_unmatched_file() {
        let mut scan = AlignmentScan::new(entries(&["x.png"]), entries(&["zzz.png"])).unwrap();

        let err = scan.next().unwrap().unwrap_err();
        assert!(matches!(err, CoreError::NoMatchFound { file_name } if file_name == "zzz.png"));
    }

    #[test]
    fn test_scan_is_fused_after_failure() {
        let mut scan = AlignmentScan::new(entries(&["x.png"]), entries(&["zzz.png"])).unwrap();

        assert!(scan.next().unwrap().is_err());
        assert!(scan.next().is_none());
    }

    #[test]
    fn test_exact_stem_match_does_not_advance_past_sibling() {
        // "a.png" matches "a.png" at cursor 0; "a_v2.png" is never visited.
        let scan =
            AlignmentScan::new(entries(&["a.png", "a_v2.png"]), entries(&["a.png"])).unwrap();

        assert_eq!(pairs(scan), [("a.png".to_string(), "a.png".to_string())]);
    }

    #[test]
    fn test_one_original_serves_multiple_downscaled() {
        // The original cursor stays put on a match, so both downscaled
        // entries pair against "img1.png".
        let scan = AlignmentScan::new(
            entries(&["img1.png", "img1_alt.png"]),
            entries(&["img1_a.png", "img1_b.png"]),
        )
        .unwrap();

        assert_eq!(
            pairs(scan),
            [
                ("img1.png".to_string(), "img1_a.png".to_string()),
                ("img1.png".to_string(), "img1_b.png".to_string()),
            ]
        );
    }

    #[test]
    fn test_unrelated_originals_are_skipped_not_revisited() {
        let scan = AlignmentScan::new(
            entries(&["a.png", "b.png", "c.png"]),
            entries(&["c_small.png"]),
        )
        .unwrap();

        assert_eq!(
            pairs(scan),
            [("c.png".to_string(), "c_small.png".to_string())]
        );
    }

    #[test]
    fn test_failure_after_earlier_matches() {
        let mut scan = AlignmentScan::new(
            entries(&["a.png", "b.png"]),
            entries(&["a_small.png", "q_small.png"]),
        )
        .unwrap();

        assert!(scan.next().unwrap().is_ok());
        let err = scan.next().unwrap().unwrap_err();
        assert!(
            matches!(err, CoreError::NoMatchFound { file_name } if file_name == "q_small.png")
        );
    }

    #[test]
    fn test_empty_listings() {
        let mut scan = AlignmentScan::new(Vec::new(), Vec::new()).unwrap();
        assert!(scan.next().is_none());
    }

    #[test]
    fn test_empty_originals_with_downscaled_fails() {
        let err = AlignmentScan::new(Vec::new(), entries(&["a.png"])).unwrap_err();
        assert!(matches!(err, CoreError::InsufficientOriginals { .. }));
    }

    proptest! {
        /// Sorting makes the scan independent of enumeration order: any
        /// shuffle of the same name sets aligns to the same pairs.
        #[test]
        fn prop_enumeration_order_is_irrelevant(
            stems in proptest::collection::btree_set("[a-z]{3,8}", 1..20usize),
            seed in any::<u64>(),
        ) {
            let originals: Vec<String> = stems.iter().map(|s| format!("{s}.png")).collect();
            let downscaled: Vec<String> = stems.iter().map(|s| format!("{s}_small.png")).collect();

            // A cheap deterministic shuffle standing in for filesystem order.
            let mut shuffled: Vec<String> = originals.clone();
            let mut state = seed;
            for i in (1..shuffled.len()).rev() {
                state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                shuffled.swap(i, (state % (i as u64 + 1)) as usize);
            }

            let mut sorted_shuffled: Vec<FileEntry> =
                shuffled.iter().map(FileEntry::new).collect();
            sorted_shuffled.sort();
            let sorted_plain: Vec<FileEntry> =
                originals.iter().map(FileEntry::new).collect();
            prop_assert_eq!(&sorted_shuffled, &sorted_plain);

            let down_entries: Vec<FileEntry> =
                downscaled.iter().map(FileEntry::new).collect();
            let scan = AlignmentScan::new(sorted_shuffled, down_entries).unwrap();
            let matched: Vec<Pair> = scan.collect::<Result<_>>().unwrap();
            prop_assert_eq!(matched.len(), stems.len());
            for pair in &matched {
                prop_assert!(pair.original.stems_related(&pair.downscaled));
            }
        }

        /// The count precondition trips before any pair is produced.
        #[test]
        fn prop_count_precondition(
            originals in 0..10usize,
            extra in 1..10usize,
        ) {
            let orig: Vec<FileEntry> =
                (0..originals).map(|i| FileEntry::new(format!("f{i:03}.png"))).collect();
            let down: Vec<FileEntry> = (0..originals + extra)
                .map(|i| FileEntry::new(format!("f{i:03}.png")))
                .collect();

            let err = AlignmentScan::new(orig, down).unwrap_err();
            let is_insufficient = matches!(err, CoreError::InsufficientOriginals { .. });
            prop_assert!(is_insufficient);
        }
    }
}
