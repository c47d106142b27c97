//! CSV dataset loading.
//!
//! Reads the exported network files from a data directory and assembles the
//! [`DatasetStore`]. File names and column headers follow the export layout;
//! the serde renames in [`crate::records`] bind the columns.

use crate::records::{EdgeRecord, MetricRow, NodePosition, ProductEntry};
use crate::store::{DatasetStore, PERIODS};
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::path::Path;

pub const POSITIONS_FILE: &str = "OEC_network_hs4_positions.csv";
pub const EDGES_FILE: &str = "OEC_network_hs4_edges.csv";
pub const DICTIONARY_FILE: &str = "dictHS.csv";

/// Metrics file name for one period.
pub fn metrics_file(period: u8) -> String {
    format!("complexity_prody_data_{period}.csv")
}

/// Load every dataset from `dir` and build the store. Any missing or
/// malformed file aborts the load; the five period tables are all required.
pub fn from_dir(dir: &Path) -> Result<DatasetStore> {
    let positions: Vec<NodePosition> = read_rows(&dir.join(POSITIONS_FILE))?;
    let edges: Vec<EdgeRecord> = read_rows(&dir.join(EDGES_FILE))?;
    let dictionary: Vec<ProductEntry> = read_rows(&dir.join(DICTIONARY_FILE))?;

    let mut metrics = BTreeMap::new();
    for period in PERIODS {
        let rows: Vec<MetricRow> = read_rows(&dir.join(metrics_file(period)))?;
        metrics.insert(period, rows);
    }

    tracing::info!(
        nodes = positions.len(),
        edges = edges.len(),
        products = dictionary.len(),
        periods = metrics.len(),
        "datasets loaded"
    );

    Ok(DatasetStore::new(positions, edges, dictionary, metrics))
}

fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut rdr = csv::Reader::from_path(path)
        .with_context(|| format!("open csv {}", path.display()))?;
    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        rows.push(result.with_context(|| format!("parse row in {}", path.display()))?);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_fixture(dir: &Path) {
        fs::write(
            dir.join(POSITIONS_FILE),
            "nodes__id,nodes__x,nodes__y\n101,0.0,0.0\n202,1.0,1.0\n",
        )
        .expect("write positions");
        fs::write(
            dir.join(EDGES_FILE),
            "edges__source,edges__target,edges__strength\n101,202,0.8\n",
        )
        .expect("write edges");
        fs::write(
            dir.join(DICTIONARY_FILE),
            "HS4 ID,HS4,Section ID\n101,Sheep,1\n202,Coffee,2\n",
        )
        .expect("write dictionary");
        for period in PERIODS {
            fs::write(
                dir.join(metrics_file(period)),
                format!("HS4 ID,PRODY\n101,{}\n", 1000 * (period as u32 + 1)),
            )
            .expect("write metrics");
        }
    }

    #[test]
    fn loads_all_tables_from_a_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_fixture(dir.path());

        let store = from_dir(dir.path()).expect("load");
        assert_eq!(store.node_count(), 2);
        assert_eq!(store.edges().len(), 1);
        assert_eq!(store.periods(), vec![0, 1, 2, 3, 4]);
        assert_eq!(store.metrics_for(2).unwrap().get(&101), Some(&3000.0));
    }

    #[test]
    fn missing_file_fails_with_its_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_fixture(dir.path());
        fs::remove_file(dir.path().join(metrics_file(3))).expect("remove");

        let err = from_dir(dir.path()).expect_err("must fail");
        assert!(format!("{err:#}").contains("complexity_prody_data_3.csv"));
    }

    #[test]
    fn malformed_row_fails_with_its_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_fixture(dir.path());
        fs::write(
            dir.path().join(EDGES_FILE),
            "edges__source,edges__target,edges__strength\n101,not-a-node,0.8\n",
        )
        .expect("rewrite edges");

        let err = from_dir(dir.path()).expect_err("must fail");
        assert!(format!("{err:#}").contains(EDGES_FILE));
    }
}
