use crate::ir::FlatFeature;
use crate::layout::LayoutResult;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct LayoutDump {
    pub width: f32,
    pub height: f32,
    pub nodes: Vec<NodeDump>,
    pub edges: Vec<EdgeDump>,
    pub warnings: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct NodeDump {
    pub id: String,
    pub name: String,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Serialize)]
pub struct EdgeDump {
    pub from: String,
    pub to: String,
}

impl LayoutDump {
    pub fn from_layout(flat: &[FlatFeature], result: &LayoutResult) -> Self {
        let mut nodes = Vec::with_capacity(flat.len());
        let mut edges = Vec::new();
        for record in flat {
            let point = result
                .positions
                .get(&record.id)
                .copied()
                .unwrap_or_default();
            nodes.push(NodeDump {
                id: record.id.clone(),
                name: record.name.clone(),
                x: point.x,
                y: point.y,
            });
            if let Some(parent_id) = &record.parent_id {
                edges.push(EdgeDump {
                    from: parent_id.clone(),
                    to: record.id.clone(),
                });
            }
        }

        let mut min_x = f32::MAX;
        let mut min_y = f32::MAX;
        let mut max_x = f32::MIN;
        let mut max_y = f32::MIN;
        for node in &nodes {
            min_x = min_x.min(node.x);
            min_y = min_y.min(node.y);
            max_x = max_x.max(node.x);
            max_y = max_y.max(node.y);
        }
        let width = if min_x == f32::MAX {
            1.0
        } else {
            (max_x - min_x).max(1.0)
        };
        let height = if min_y == f32::MAX {
            1.0
        } else {
            (max_y - min_y).max(1.0)
        };

        Self {
            width,
            height,
            nodes,
            edges,
            warnings: result
                .warnings
                .iter()
                .map(|warning| warning.to_string())
                .collect(),
        }
    }
}

pub fn write_layout_dump(path: Option<&Path>, dump: &LayoutDump) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            let file = File::create(path)?;
            let writer = BufWriter::new(file);
            serde_json::to_writer_pretty(writer, dump)?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = stdout.lock();
            serde_json::to_writer_pretty(&mut writer, dump)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}
