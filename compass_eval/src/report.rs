/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */
#![allow(unused)]

use std::io::Write;
use std::sync::Arc;
use serde::Serialize;
use serde_json::Value as JsonValue;

use compass_common::macros::invariant;

use crate::errors::Result;
use crate::result::{SingleResult,JoinedResult};

/// tabular report destination: a named table of rows of json values. This type
/// only fixes the data contract - rendering (report documents, views) happens
/// in the consuming report generator
#[derive(Serialize,Debug,Clone)]
pub struct ReportTable {
    name: String,
    headers: Vec<String>,
    rows: Vec<Vec<JsonValue>>,
}

impl ReportTable {
    pub fn new (name: impl ToString, headers: &[&str])->Self {
        ReportTable {
            name: name.to_string(),
            headers: headers.iter().map( |h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    #[inline] pub fn name (&self)->&str { self.name.as_str() }
    #[inline] pub fn headers (&self)->&[String] { self.headers.as_slice() }
    #[inline] pub fn rows (&self)->&[Vec<JsonValue>] { self.rows.as_slice() }
    #[inline] pub fn num_rows (&self)->usize { self.rows.len() }

    pub fn add_row (&mut self, row: Vec<JsonValue>) {
        invariant!( row.len() == self.headers.len(),
                    "table {} row width {} does not match header width {}", self.name, row.len(), self.headers.len());
        self.rows.push( row);
    }

    /// render the table as CSV (header record plus one record per row)
    pub fn write_csv<W: Write> (&self, w: W)->Result<()> {
        let mut wtr = csv::Writer::from_writer( w);

        wtr.write_record( &self.headers)?;

        for row in &self.rows {
            wtr.write_record( row.iter().map( cell_str))?;
        }

        wtr.flush()?;
        Ok(())
    }
}

fn cell_str (v: &JsonValue)->String {
    match v {
        JsonValue::Null => String::new(),
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// per-target results table over the single results of one requirement /
/// sector layer. All results must be of the same kind
pub fn target_table (name: impl ToString, results: &[Arc<SingleResult>])->ReportTable {
    let Some(first) = results.first() else {
        return ReportTable::new( name, &[]);
    };

    let mut table = ReportTable::new( name, &first.target_table_headers());

    for result in results {
        invariant!( result.kind() == first.kind(),
                    "mixed result kinds in target table: {} vs {}", result.kind(), first.kind());
        table.add_row( result.target_table_row());
    }

    table
}

/// single row sector table for one joined result
pub fn sector_table (name: impl ToString, joined: &JoinedResult)->ReportTable {
    let mut table = ReportTable::new( name, &joined.sector_table_headers());
    table.add_row( joined.sector_table_row());
    table
}
