//! RDKit toolkit adapter.
//!
//! Drives the RDKit Python bindings through pyo3. The RDKit modules are
//! imported once when the toolkit is built and kept for its whole lifetime.
//! Every call attaches to the interpreter, which serializes toolkit access
//! across worker threads.

use pyo3::prelude::*;
use pyo3::types::{PyList, PyModule};
use tracing::{debug, info};

use super::{AlertSet, Descriptors, Toolkit, ToolkitError, ToolkitResult};

/// An RDKit `Mol` owned by the Rust side.
///
/// Dropping it releases the Python reference.
pub struct RdkitMol(Py<PyAny>);

/// An RDKit `FilterCatalog`.
pub struct RdkitCatalog(Py<PyAny>);

/// Toolkit backed by the `rdkit` Python package.
pub struct RdkitToolkit {
    chem: Py<PyModule>,
    inchi: Py<PyModule>,
    crippen: Py<PyModule>,
    mol_descriptors: Py<PyModule>,
    filter_catalog: Py<PyModule>,
    fmcs: Py<PyModule>,
    mol_hash: Py<PyModule>,
    sanitize_exception: Py<PyAny>,
}

impl RdkitToolkit {
    /// Import the RDKit modules the server relies on.
    pub fn new() -> ToolkitResult<Self> {
        Python::attach(|py| {
            let import = |name: &str| -> ToolkitResult<Py<PyModule>> {
                py.import(name)
                    .map(Bound::unbind)
                    .map_err(|e| ToolkitError::unavailable(format!("cannot import {}: {}", name, e)))
            };

            let rdchem = import("rdkit.Chem.rdchem")?;
            let sanitize_exception = rdchem
                .bind(py)
                .getattr("MolSanitizeException")
                .map(Bound::unbind)
                .map_err(|e| ToolkitError::unavailable(e.to_string()))?;

            let inchi = import("rdkit.Chem.inchi")?;
            let has_inchi = inchi
                .bind(py)
                .hasattr("MolToInchi")
                .map_err(|e| ToolkitError::unavailable(e.to_string()))?;
            if !has_inchi {
                return Err(ToolkitError::unavailable(
                    "RDKit was built without InChI support",
                ));
            }

            let version: String = import("rdkit")?
                .bind(py)
                .getattr("__version__")
                .and_then(|v| v.extract())
                .unwrap_or_else(|_| "unknown".to_string());
            info!("Loaded RDKit {}", version);

            Ok(Self {
                chem: import("rdkit.Chem")?,
                inchi,
                crippen: import("rdkit.Chem.Crippen")?,
                mol_descriptors: import("rdkit.Chem.rdMolDescriptors")?,
                filter_catalog: import("rdkit.Chem.rdfiltercatalog")?,
                fmcs: import("rdkit.Chem.rdFMCS")?,
                mol_hash: import("rdkit.Chem.rdMolHash")?,
                sanitize_exception,
            })
        })
    }

    /// Sort a Python exception into a sanitization error or a plain failure.
    fn convert(&self, py: Python<'_>, err: PyErr) -> ToolkitError {
        if err.is_instance(py, self.sanitize_exception.bind(py)) {
            ToolkitError::sanitization(err.to_string())
        } else {
            ToolkitError::failure(err.to_string())
        }
    }

    fn parse(&self, parser: &str, text: &str) -> ToolkitResult<Option<RdkitMol>> {
        Python::attach(|py| {
            let mol = self
                .chem
                .bind(py)
                .call_method1(parser, (text,))
                .map_err(|e| self.convert(py, e))?;
            if mol.is_none() {
                Ok(None)
            } else {
                Ok(Some(RdkitMol(mol.unbind())))
            }
        })
    }
}

impl Toolkit for RdkitToolkit {
    type Molecule = RdkitMol;
    type Catalog = RdkitCatalog;

    fn mol_from_block(&self, block: &str) -> ToolkitResult<Option<RdkitMol>> {
        self.parse("MolFromMolBlock", block)
    }

    fn mol_from_line(&self, line: &str) -> ToolkitResult<Option<RdkitMol>> {
        // RDKit turns "" into an empty molecule rather than a failure.
        if line.is_empty() {
            debug!("Empty line notation, no molecule");
            return Ok(None);
        }
        self.parse("MolFromSmiles", line)
    }

    fn block_to_identifier(&self, block: &str) -> ToolkitResult<String> {
        Python::attach(|py| {
            let inchi: Option<String> = self
                .inchi
                .bind(py)
                .call_method1("MolBlockToInchi", (block,))
                .and_then(|v| v.extract())
                .map_err(|e| self.convert(py, e))?;
            Ok(inchi.unwrap_or_default())
        })
    }

    fn mol_to_identifier(&self, mol: &RdkitMol) -> ToolkitResult<String> {
        Python::attach(|py| {
            let inchi: Option<String> = self
                .inchi
                .bind(py)
                .call_method1("MolToInchi", (mol.0.bind(py),))
                .and_then(|v| v.extract())
                .map_err(|e| self.convert(py, e))?;
            Ok(inchi.unwrap_or_default())
        })
    }

    fn identifier_to_key(&self, identifier: &str) -> ToolkitResult<String> {
        Python::attach(|py| {
            // InchiToInchiKey answers None for malformed identifiers.
            let key: Option<String> = self
                .inchi
                .bind(py)
                .call_method1("InchiToInchiKey", (identifier,))
                .and_then(|v| v.extract())
                .map_err(|e| self.convert(py, e))?;
            Ok(key.unwrap_or_default())
        })
    }

    fn descriptors(&self, mol: &RdkitMol) -> ToolkitResult<Descriptors> {
        Python::attach(|py| {
            let mol = mol.0.bind(py);
            let calc = self.mol_descriptors.bind(py);
            let real = |name: &str| -> PyResult<f64> { calc.call_method1(name, (mol,))?.extract() };
            let count = |name: &str| -> PyResult<f64> {
                Ok(calc.call_method1(name, (mol,))?.extract::<u32>()? as f64)
            };

            let compute = || -> PyResult<Descriptors> {
                Ok(Descriptors {
                    clogp: self.crippen.bind(py).call_method1("MolLogP", (mol,))?.extract()?,
                    exact_mw: real("CalcExactMolWt")?,
                    num_hba: count("CalcNumHBA")?,
                    num_hbd: count("CalcNumHBD")?,
                    num_heavy_atoms: mol.call_method0("GetNumHeavyAtoms")?.extract::<u32>()? as f64,
                    num_rings: count("CalcNumRings")?,
                    num_rotatable_bonds: count("CalcNumRotatableBonds")?,
                    tpsa: real("CalcTPSA")?,
                })
            };
            compute().map_err(|e| self.convert(py, e))
        })
    }

    fn filter_catalog(&self, sets: &[AlertSet]) -> ToolkitResult<RdkitCatalog> {
        Python::attach(|py| {
            let build = || -> PyResult<RdkitCatalog> {
                let module = self.filter_catalog.bind(py);
                let params_type = module.getattr("FilterCatalogParams")?;
                let catalogs = params_type.getattr("FilterCatalogs")?;
                let params = params_type.call0()?;
                for set in sets {
                    debug!("Adding alert set {}", set);
                    params.call_method1("AddCatalog", (catalogs.getattr(set.catalog_name())?,))?;
                }
                let catalog = module.getattr("FilterCatalog")?.call1((params,))?;
                Ok(RdkitCatalog(catalog.unbind()))
            };
            build().map_err(|e| self.convert(py, e))
        })
    }

    fn first_match(&self, catalog: &RdkitCatalog, mol: &RdkitMol) -> ToolkitResult<Option<String>> {
        Python::attach(|py| {
            let lookup = || -> PyResult<Option<String>> {
                let entry = catalog
                    .0
                    .bind(py)
                    .call_method1("GetFirstMatch", (mol.0.bind(py),))?;
                if entry.is_none() {
                    return Ok(None);
                }
                Ok(Some(entry.call_method0("GetDescription")?.extract()?))
            };
            lookup().map_err(|e| self.convert(py, e))
        })
    }

    fn find_mcs(&self, mols: &[RdkitMol]) -> ToolkitResult<String> {
        // FindMCS rejects fewer than two molecules; the empty pattern stands in.
        if mols.len() < 2 {
            debug!("MCS over {} molecule(s), returning empty pattern", mols.len());
            return Ok(String::new());
        }
        Python::attach(|py| {
            let search = || -> PyResult<String> {
                let list = PyList::new(py, mols.iter().map(|m| m.0.bind(py)))?;
                self.fmcs
                    .bind(py)
                    .call_method1("FindMCS", (list,))?
                    .getattr("smartsString")?
                    .extract()
            };
            search().map_err(|e| self.convert(py, e))
        })
    }

    fn murcko_scaffold(&self, mol: &RdkitMol) -> ToolkitResult<String> {
        Python::attach(|py| {
            let hash = || -> PyResult<String> {
                let module = self.mol_hash.bind(py);
                let function = module.getattr("HashFunction")?.getattr("MurckoScaffold")?;
                module
                    .call_method1("MolHash", (mol.0.bind(py), function))?
                    .extract()
            };
            hash().map_err(|e| self.convert(py, e))
        })
    }
}
