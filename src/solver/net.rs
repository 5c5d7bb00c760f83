/*
MIT License

Copyright (c) 2026 Raja Lehtihet and Wael El Oraiby

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

//! Linked domains and the constraint ledger.
//!
//! A [`ConstraintNet`] owns linked domains and remembers every constraint
//! they satisfied. Domains are addressed by opaque [`DomainId`] handles, so
//! identity is explicit: two domains sharing a current value stay distinct
//! keys in every assignment.
//!
//! Each successful `require` appends one constraint record shared by all
//! its participants. A later `require` touching any linked domain must keep
//! every reachable record satisfied: the resolver re-enumerates each
//! record's solutions, intersects them pairwise into one combined set, and
//! commits only an assignment that satisfies old and new constraints alike.

use crate::ast::Formula;
use crate::domain::Domain;
use crate::errors::ResolveError;
use crate::number::Number;
use crate::parser::compile;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use super::resolve::{validate_kinds, validate_targets};
use super::search::{Binding, search};
use super::{Cmp, SearchMode};

/// Opaque handle to a linked domain, issued by [`ConstraintNet::insert`].
///
/// Handles are the identity keys of assignments and constraint records;
/// they are only meaningful to the net that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DomainId(usize);

impl fmt::Display for DomainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Slot index into the net's record arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct RecordId(usize);

/// A remembered constraint: what was required, of whom, against what.
#[derive(Debug, Clone, PartialEq)]
struct ConstraintRecord {
    expression: String,
    formula: Formula,
    participants: Vec<DomainId>,
    cmp: Cmp,
    targets: Vec<Number>,
}

impl ConstraintRecord {
    /// Structural equality used to skip re-processing equivalent records.
    fn same_shape(&self, other: &ConstraintRecord) -> bool {
        self.expression == other.expression
            && self.participants == other.participants
            && self.cmp == other.cmp
            && self.targets == other.targets
    }
}

/// A linked domain plus its share of the constraint ledger.
#[derive(Debug, Clone)]
struct NetEntry {
    name: String,
    domain: Domain,
    records: Vec<RecordId>,
}

/// Owner of linked domains and their shared constraint records.
#[derive(Debug, Clone, Default)]
pub struct ConstraintNet {
    entries: Vec<NetEntry>,
    // Records live in one arena; participants hold ids. A cleared slot is
    // `None`, so removal through one participant removes it for all.
    records: Vec<Option<ConstraintRecord>>,
}

impl ConstraintNet {
    /// Creates an empty net.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a domain under an auto-generated name, returning its handle.
    pub fn insert(&mut self, domain: Domain) -> DomainId {
        let name = format!("d{}", self.entries.len());
        self.insert_named(name, domain)
    }

    /// Adds a domain under a caller-visible name, returning its handle.
    ///
    /// The name only affects [`constraints`](Self::constraints) rendering.
    pub fn insert_named(&mut self, name: impl Into<String>, domain: Domain) -> DomainId {
        let id = DomainId(self.entries.len());
        self.entries.push(NetEntry {
            name: name.into(),
            domain,
            records: Vec::new(),
        });
        id
    }

    /// Returns the number of domains in the net.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the net holds no domains.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the domain behind a handle.
    ///
    /// # Panics
    ///
    /// Panics when the handle was issued by a different net.
    pub fn domain(&self, id: DomainId) -> &Domain {
        &self.entries[id.0].domain
    }

    /// Returns the domain behind a handle for candidate-list mutations.
    ///
    /// Shrinking a candidate list can make a recorded constraint
    /// unsatisfiable; the next `require` reaching it will then fail.
    ///
    /// # Panics
    ///
    /// Panics when the handle was issued by a different net.
    pub fn domain_mut(&mut self, id: DomainId) -> &mut Domain {
        &mut self.entries[id.0].domain
    }

    /// Returns the caller-visible name of a domain.
    pub fn name(&self, id: DomainId) -> &str {
        &self.entries[id.0].name
    }

    /// Imposes a constraint on linked domains, honoring recorded history.
    ///
    /// Each distinct variable letter of `expression` (first-occurrence
    /// order) binds to the handle at the same position. The resolver walks
    /// the link graph from the passed handles, re-solves every reachable
    /// record, and intersects all solution sets with the new constraint's.
    /// On success the first combined assignment is committed to every
    /// involved domain, a new record is appended to the passed handles, and
    /// the result is `Ok(true)`. When the combined set is empty — including
    /// when some earlier record alone has become unsatisfiable — nothing is
    /// mutated and the result is `Ok(false)`.
    pub fn require(
        &mut self,
        expression: &str,
        ids: &[DomainId],
        cmp: Cmp,
        targets: &[Number],
    ) -> Result<bool, ResolveError> {
        validate_targets(cmp, targets)?;
        for id in ids {
            if id.0 >= self.entries.len() {
                return Err(ResolveError::UnknownDomain(*id));
            }
        }

        let formula = compile(expression)?;
        if formula.variables().len() != ids.len() {
            return Err(ResolveError::ArityMismatch {
                variables: formula.variables().len(),
                domains: ids.len(),
            });
        }
        validate_kinds(ids.iter().map(|id| self.domain(*id)))?;

        // Combined set of assignments satisfying every record so far.
        let mut combined: Option<Vec<BTreeMap<DomainId, usize>>> = None;
        for record_id in self.reachable_records(ids) {
            let Some(record) = &self.records[record_id.0] else {
                continue;
            };
            let rows = self.solve_record(record);
            if rows.is_empty() {
                // A previously satisfiable constraint has become
                // unsatisfiable; the whole resolve fails.
                return Ok(false);
            }
            combined = Some(match combined {
                None => rows,
                Some(acc) => intersect(&acc, &rows),
            });
            if combined.as_ref().is_some_and(Vec::is_empty) {
                return Ok(false);
            }
        }

        let bindings: Vec<Binding<'_, DomainId>> = formula
            .variables()
            .iter()
            .zip(ids)
            .map(|(&letter, &id)| Binding {
                key: id,
                letter,
                domain: self.domain(id),
            })
            .collect();
        let rows = search(&formula, &bindings, cmp, targets, SearchMode::All);
        drop(bindings);

        let combined = match combined {
            None => rows,
            Some(acc) => intersect(&acc, &rows),
        };
        let Some(assignment) = combined.into_iter().next() else {
            return Ok(false);
        };

        for (id, index) in &assignment {
            self.entries[id.0].domain.set_current(*index);
        }

        let record_id = RecordId(self.records.len());
        self.records.push(Some(ConstraintRecord {
            expression: expression.to_string(),
            formula,
            participants: ids.to_vec(),
            cmp,
            targets: targets.to_vec(),
        }));
        for id in dedup_ids(ids) {
            self.entries[id.0].records.push(record_id);
        }
        Ok(true)
    }

    /// Removes every record this domain participates in, from all
    /// participants.
    pub fn clear_constraints(&mut self, id: DomainId) {
        let record_ids = std::mem::take(&mut self.entries[id.0].records);
        for record_id in record_ids {
            let Some(record) = self.records[record_id.0].take() else {
                continue;
            };
            for participant in dedup_ids(&record.participants) {
                self.entries[participant.0]
                    .records
                    .retain(|r| *r != record_id);
            }
        }
    }

    /// Renders this domain's records for humans, substituting domain names
    /// for variable letters. Cosmetic only.
    pub fn constraints(&self, id: DomainId) -> Vec<String> {
        self.entries[id.0]
            .records
            .iter()
            .filter_map(|record_id| self.records[record_id.0].as_ref())
            .map(|record| self.render_record(record))
            .collect()
    }

    /// Collects reachable record ids by walking the link graph outward
    /// from the seed handles, skipping structural duplicates.
    fn reachable_records(&self, seeds: &[DomainId]) -> Vec<RecordId> {
        let mut discovered = dedup_ids(seeds);
        let mut cursor = 0;
        while cursor < discovered.len() {
            let id = discovered[cursor];
            cursor += 1;
            for record_id in &self.entries[id.0].records {
                let Some(record) = &self.records[record_id.0] else {
                    continue;
                };
                for participant in &record.participants {
                    if !discovered.contains(participant) {
                        discovered.push(*participant);
                    }
                }
            }
        }

        let mut ordered: Vec<RecordId> = Vec::new();
        for id in &discovered {
            for record_id in &self.entries[id.0].records {
                if ordered.contains(record_id) {
                    continue;
                }
                let Some(record) = &self.records[record_id.0] else {
                    continue;
                };
                let duplicate = ordered.iter().any(|seen| {
                    self.records[seen.0]
                        .as_ref()
                        .is_some_and(|s| s.same_shape(record))
                });
                if !duplicate {
                    ordered.push(*record_id);
                }
            }
        }
        ordered
    }

    /// Collects every assignment satisfying one recorded constraint.
    fn solve_record(&self, record: &ConstraintRecord) -> Vec<BTreeMap<DomainId, usize>> {
        let bindings: Vec<Binding<'_, DomainId>> = record
            .formula
            .variables()
            .iter()
            .zip(&record.participants)
            .map(|(&letter, &id)| Binding {
                key: id,
                letter,
                domain: self.domain(id),
            })
            .collect();
        search(
            &record.formula,
            &bindings,
            record.cmp,
            &record.targets,
            SearchMode::All,
        )
    }

    fn render_record(&self, record: &ConstraintRecord) -> String {
        let by_letter: BTreeMap<char, DomainId> = record
            .formula
            .variables()
            .iter()
            .copied()
            .zip(record.participants.iter().copied())
            .collect();

        let mut text = String::with_capacity(record.expression.len() + 16);
        for c in record.expression.chars() {
            match by_letter.get(&c) {
                Some(id) => text.push_str(self.name(*id)),
                None => text.push(c),
            }
        }

        let targets: Vec<String> = record.targets.iter().map(Number::to_string).collect();
        format!("{} {} {}", text, record.cmp, targets.join(", "))
    }
}

/// Merges two assignment sets: a pair is compatible when every shared
/// domain is bound to the same index, and merges into one map covering the
/// union of domains. Output order follows construction; duplicates are
/// dropped.
fn intersect(
    left: &[BTreeMap<DomainId, usize>],
    right: &[BTreeMap<DomainId, usize>],
) -> Vec<BTreeMap<DomainId, usize>> {
    let mut out = Vec::new();
    let mut seen = BTreeSet::new();
    for a in left {
        for b in right {
            let compatible = a
                .iter()
                .all(|(id, index)| b.get(id).is_none_or(|other| other == index));
            if !compatible {
                continue;
            }
            let mut merged = a.clone();
            for (id, index) in b {
                merged.insert(*id, *index);
            }
            if seen.insert(merged.clone()) {
                out.push(merged);
            }
        }
    }
    out
}

/// Preserves first occurrences, dropping repeated handles.
fn dedup_ids(ids: &[DomainId]) -> Vec<DomainId> {
    let mut out = Vec::with_capacity(ids.len());
    for id in ids {
        if !out.contains(id) {
            out.push(*id);
        }
    }
    out
}
