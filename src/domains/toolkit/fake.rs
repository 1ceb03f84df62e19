//! Deterministic toolkit stand-in for tests.
//!
//! Molecules are just their source text. Line notations containing
//! characters outside the usual SMILES alphabet fail sanitization, and the
//! literal `explode` raises a non-sanitization failure.

use std::sync::Mutex;

use super::{AlertSet, Descriptors, Toolkit, ToolkitError, ToolkitResult};

const LINE_ALPHABET: &str = "()[]=#@+-/\\%.*:";

/// Which parser the fake was asked to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseCall {
    Block,
    Line,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeMol {
    pub source: String,
}

#[derive(Debug)]
pub struct FakeCatalog {
    pub sets: Vec<AlertSet>,
}

#[derive(Debug, Default)]
pub struct FakeToolkit {
    calls: Mutex<Vec<ParseCall>>,
}

impl FakeToolkit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parser invocations recorded so far.
    pub fn calls(&self) -> Vec<ParseCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: ParseCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl Toolkit for FakeToolkit {
    type Molecule = FakeMol;
    type Catalog = FakeCatalog;

    fn mol_from_block(&self, block: &str) -> ToolkitResult<Option<FakeMol>> {
        self.record(ParseCall::Block);
        if block.contains("INVALID") {
            return Err(ToolkitError::sanitization("Explicit valence for atom # 0 C, 5, is greater than permitted"));
        }
        let title = block.lines().next().unwrap_or_default().trim();
        Ok(Some(FakeMol {
            source: title.to_string(),
        }))
    }

    fn mol_from_line(&self, line: &str) -> ToolkitResult<Option<FakeMol>> {
        self.record(ParseCall::Line);
        if line.is_empty() {
            return Ok(None);
        }
        if line == "explode" {
            return Err(ToolkitError::failure("toolkit blew up"));
        }
        let valid = line
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || LINE_ALPHABET.contains(c));
        if !valid {
            return Err(ToolkitError::sanitization(format!(
                "SMILES Parse Error: syntax error for input: '{}'",
                line
            )));
        }
        Ok(Some(FakeMol {
            source: line.to_string(),
        }))
    }

    fn block_to_identifier(&self, block: &str) -> ToolkitResult<String> {
        if !block.contains("M  END") {
            return Ok(String::new());
        }
        let title = block.lines().next().unwrap_or_default().trim();
        Ok(format!("InChI=1S/{}", title))
    }

    fn mol_to_identifier(&self, mol: &FakeMol) -> ToolkitResult<String> {
        Ok(format!("InChI=1S/{}", mol.source))
    }

    fn identifier_to_key(&self, identifier: &str) -> ToolkitResult<String> {
        match identifier.strip_prefix("InChI=1S/") {
            Some(rest) if !rest.is_empty() => Ok(format!("{}-UHFFFAOYSA-N", rest.to_uppercase())),
            _ => Ok(String::new()),
        }
    }

    fn descriptors(&self, mol: &FakeMol) -> ToolkitResult<Descriptors> {
        let heavy = mol
            .source
            .chars()
            .filter(|c| c.is_ascii_alphabetic() && *c != 'H' && *c != 'l' && *c != 'r')
            .count();
        let ring_closures = mol.source.chars().filter(|c| c.is_ascii_digit()).count();
        Ok(Descriptors {
            clogp: 0.5,
            exact_mw: 12.0 * heavy as f64,
            num_hba: mol.source.matches('O').count() as f64,
            num_hbd: 0.0,
            num_heavy_atoms: heavy as f64,
            num_rings: (ring_closures / 2) as f64,
            num_rotatable_bonds: 0.0,
            tpsa: 0.0,
        })
    }

    fn filter_catalog(&self, sets: &[AlertSet]) -> ToolkitResult<FakeCatalog> {
        Ok(FakeCatalog {
            sets: sets.to_vec(),
        })
    }

    fn first_match(&self, catalog: &FakeCatalog, mol: &FakeMol) -> ToolkitResult<Option<String>> {
        // One alert per set; the catalog reports whichever set comes first.
        for set in &catalog.sets {
            let (motif, description) = match set {
                AlertSet::PainsA => ("N=N", "azo_A(324)"),
                AlertSet::PainsB => ("C=S", "thio_ketone(1)"),
                AlertSet::PainsC => ("C=N", "imine_one_A(321)"),
            };
            if mol.source.contains(motif) {
                return Ok(Some(description.to_string()));
            }
        }
        Ok(None)
    }

    fn find_mcs(&self, mols: &[FakeMol]) -> ToolkitResult<String> {
        if mols.len() < 2 {
            return Ok(String::new());
        }
        let first = mols[0].source.as_str();
        let common = mols[1..].iter().fold(first.len(), |len, mol| {
            first[..len]
                .chars()
                .zip(mol.source.chars())
                .take_while(|(a, b)| a == b)
                .count()
        });
        Ok(first[..common].to_string())
    }

    fn murcko_scaffold(&self, mol: &FakeMol) -> ToolkitResult<String> {
        Ok(mol
            .source
            .chars()
            .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
            .collect())
    }
}
