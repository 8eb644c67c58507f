//! Array element correspondence.
//!
//! Two modes, selected once per invocation. Positional mode walks indices
//! in lock-step. Order-insensitive mode runs a fixed pass pipeline over
//! per-array claimed-index sets: exact matches first, then primary-key
//! correspondence where a rule covers the array, then a positional
//! fallback for arrays no rule covers, then a sweep that turns every
//! unclaimed leftover into a remove or an add.
//!
//! Every pass scans in ascending index order and takes the first available
//! candidate; output is deterministic for a given input and configuration.

use std::collections::HashSet;

use serde_json::Value;
use tracing::trace;

use vdiff_keys::{extract_key, KeySpec};
use vdiff_types::{DiffOp, DiffRecord, DiffResult, Path};

use crate::compare::Comparator;

/// Transient bookkeeping for one array comparison: indices already paired
/// or finalized on each side.
struct Claims {
    source: HashSet<usize>,
    target: HashSet<usize>,
}

impl Claims {
    fn new() -> Self {
        Self {
            source: HashSet::new(),
            target: HashSet::new(),
        }
    }
}

impl Comparator<'_> {
    pub(crate) fn compare_arrays(
        &mut self,
        src_path: &Path,
        source: &[Value],
        tgt_path: &Path,
        target: &[Value],
        depth: usize,
    ) -> DiffResult<()> {
        if self.config.ignore_array_order {
            self.match_unordered(src_path, source, tgt_path, target, depth)
        } else {
            self.match_positional(src_path, source, tgt_path, target, depth)
        }
    }

    /// Positional mode: index `i` corresponds to index `i`, no lookahead.
    /// Indices past the shorter length become removes (source side) or
    /// adds (target side).
    fn match_positional(
        &mut self,
        src_path: &Path,
        source: &[Value],
        tgt_path: &Path,
        target: &[Value],
        depth: usize,
    ) -> DiffResult<()> {
        let shared = source.len().min(target.len());
        for i in 0..shared {
            if source[i] != target[i] {
                self.compare(
                    &src_path.element(i),
                    &source[i],
                    &tgt_path.element(i),
                    &target[i],
                    depth + 1,
                )?;
            }
        }
        for (i, value) in source.iter().enumerate().skip(shared) {
            self.records.push(DiffRecord::new(
                DiffOp::Remove,
                src_path.element(i),
                value.clone(),
            ));
        }
        for (j, value) in target.iter().enumerate().skip(shared) {
            self.records.push(DiffRecord::new(
                DiffOp::Add,
                tgt_path.element(j),
                value.clone(),
            ));
        }
        Ok(())
    }

    /// Order-insensitive mode: the fixed pass pipeline described in the
    /// module docs.
    fn match_unordered(
        &mut self,
        src_path: &Path,
        source: &[Value],
        tgt_path: &Path,
        target: &[Value],
        depth: usize,
    ) -> DiffResult<()> {
        let mut claims = Claims::new();

        // Exact-match pass: identical elements pair up silently, first
        // available target wins.
        for (i, src_value) in source.iter().enumerate() {
            for (j, tgt_value) in target.iter().enumerate() {
                if !claims.target.contains(&j) && src_value == tgt_value {
                    claims.source.insert(i);
                    claims.target.insert(j);
                    break;
                }
            }
        }
        trace!(
            matched = claims.source.len(),
            source = source.len(),
            target = target.len(),
            "exact-match pass complete"
        );

        // Primary-key pass, where a rule covers this array. Copy the
        // config reference out so the resolved spec does not pin `self`.
        let config = self.config;
        let spec = config.primary_keys.resolve(src_path);
        if let Some(spec) = spec {
            self.match_by_key(
                src_path,
                source,
                tgt_path,
                target,
                spec,
                &mut claims,
                depth,
            )?;
        }

        // Fallback pairing: with no key rule there is no better signal
        // than position, so leftovers pair up by rank and recurse. When a
        // rule applies the keyed pass is authoritative and leftovers fall
        // through to the sweep.
        if spec.is_none() {
            let src_rest: Vec<usize> =
                (0..source.len()).filter(|i| !claims.source.contains(i)).collect();
            let tgt_rest: Vec<usize> =
                (0..target.len()).filter(|j| !claims.target.contains(j)).collect();
            for (&i, &j) in src_rest.iter().zip(tgt_rest.iter()) {
                claims.source.insert(i);
                claims.target.insert(j);
                self.compare(
                    &src_path.element(i),
                    &source[i],
                    &tgt_path.element(j),
                    &target[j],
                    depth + 1,
                )?;
            }
        }

        // Sweep: whatever is still unclaimed exists on one side only.
        for (i, value) in source.iter().enumerate() {
            if !claims.source.contains(&i) {
                self.records.push(DiffRecord::new(
                    DiffOp::Remove,
                    src_path.element(i),
                    value.clone(),
                ));
            }
        }
        for (j, value) in target.iter().enumerate() {
            if !claims.target.contains(&j) {
                self.records.push(DiffRecord::new(
                    DiffOp::Add,
                    tgt_path.element(j),
                    value.clone(),
                ));
            }
        }
        Ok(())
    }

    /// Key-based correspondence for still-unclaimed elements.
    ///
    /// A source element with no extractable key is finalized as removed on
    /// the spot; a scanned target element with no extractable key is
    /// finalized as added. Matched pairs recurse at their own indices, so
    /// records under a relocated pair carry both locations.
    fn match_by_key(
        &mut self,
        src_path: &Path,
        source: &[Value],
        tgt_path: &Path,
        target: &[Value],
        spec: &KeySpec,
        claims: &mut Claims,
        depth: usize,
    ) -> DiffResult<()> {
        for (i, src_value) in source.iter().enumerate() {
            if claims.source.contains(&i) {
                continue;
            }
            let Some(src_key) = extract_key(src_value, spec) else {
                self.records.push(DiffRecord::new(
                    DiffOp::Remove,
                    src_path.element(i),
                    src_value.clone(),
                ));
                claims.source.insert(i);
                continue;
            };
            let mut matched = None;
            for (j, tgt_value) in target.iter().enumerate() {
                if claims.target.contains(&j) {
                    continue;
                }
                match extract_key(tgt_value, spec) {
                    None => {
                        self.records.push(DiffRecord::new(
                            DiffOp::Add,
                            tgt_path.element(j),
                            tgt_value.clone(),
                        ));
                        claims.target.insert(j);
                    }
                    Some(tgt_key) if tgt_key == src_key => {
                        matched = Some(j);
                        break;
                    }
                    Some(_) => {}
                }
            }
            if let Some(j) = matched {
                claims.source.insert(i);
                claims.target.insert(j);
                self.compare(
                    &src_path.element(i),
                    &source[i],
                    &tgt_path.element(j),
                    &target[j],
                    depth + 1,
                )?;
            }
        }
        Ok(())
    }
}
