//! 图打印器
//!
//! 提供邻接表文本和邻接矩阵表格两种输出

use crate::graph::Graph;
use crate::stats::GraphSnapshot;
use crate::types::{Representation, Weight};
use prettytable::{format, row, Cell, Row, Table};
use std::fmt::Write;

/// 打印风格
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintStyle {
    /// 按图的表示自动选择
    Auto,
    /// 邻接表文本
    List,
    /// 邻接矩阵表格
    Matrix,
}

/// 图打印器
pub struct Printer {
    style: PrintStyle,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(PrintStyle::Auto)
    }
}

impl Printer {
    pub fn new(style: PrintStyle) -> Self {
        Self { style }
    }

    /// 渲染整张图
    pub fn print_graph(&self, graph: &dyn Graph) -> String {
        let style = match self.style {
            PrintStyle::Auto => match graph.representation() {
                Representation::List => PrintStyle::List,
                Representation::Matrix => PrintStyle::Matrix,
            },
            other => other,
        };

        match style {
            PrintStyle::Matrix => self.format_matrix(graph),
            _ => self.format_list(graph),
        }
    }

    /// 邻接表格式
    fn format_list(&self, graph: &dyn Graph) -> String {
        let mut output = String::new();
        for vertex in graph.vertices() {
            let _ = writeln!(output, "Vertex {}:", vertex);
            for (neighbour, weight) in graph.adjacency(vertex).unwrap_or_default() {
                let _ = writeln!(output, "Edge: ({}, {})", neighbour, format_weight(weight));
            }
        }
        output
    }

    /// 矩阵表格格式
    fn format_matrix(&self, graph: &dyn Graph) -> String {
        let vertices = graph.vertices();
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        // 表头：空白角 + 列顶点
        let mut header = vec![Cell::new("")];
        header.extend(vertices.iter().map(|v| Cell::new(&v.to_string())));
        table.set_titles(Row::new(header));

        for &from in &vertices {
            let adjacency = graph.adjacency(from).unwrap_or_default();
            let mut cells = vec![Cell::new(&from.to_string())];
            cells.extend(vertices.iter().map(|&to| {
                let text = adjacency
                    .iter()
                    .find(|(n, _)| *n == to)
                    .map(|&(_, w)| format_weight(w))
                    .unwrap_or_else(|| "-".to_string());
                Cell::new(&text)
            }));
            table.add_row(Row::new(cells));
        }

        table.to_string()
    }

    /// 打印统计信息
    pub fn print_stats(&self, snapshot: &GraphSnapshot) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Property", "Value"]);
        table.add_row(row!["Representation", snapshot.representation.to_string()]);
        table.add_row(row!["Directed", snapshot.directed.to_string()]);
        table.add_row(row!["Weighted", snapshot.weighted.to_string()]);
        table.add_row(row!["Vertex Count", snapshot.vertices.to_string()]);
        table.add_row(row!["Edge Count", snapshot.edges.to_string()]);
        table.to_string()
    }

    /// 打印帮助信息
    pub fn print_help() -> String {
        r#"
═══════════════════════════════════════════════════════════════
                     adjgraph CLI 命令帮助
═══════════════════════════════════════════════════════════════

  vertex, v <ID>           添加顶点（已存在时重置，仅邻接表）
  edge, e <起点> <终点> [权重]
                           添加边，权重默认为 1
  remove, rm <起点> <终点> 删除边
  has <起点> <终点>        是否存在边
  neighbours, n <ID>       查看顶点邻居
  weight, w <起点> <终点>  查看边权重
  print, p [list|matrix]   打印整张图，可指定打印风格
  stats [json]             显示图统计信息
  help, h, ?               显示帮助
  quit, exit, q            退出程序

多条命令可以用 ; 分隔，例如: edge 0 1; edge 1 2; print
═══════════════════════════════════════════════════════════════
"#
        .to_string()
    }
}

/// 整数权重不带小数部分
pub fn format_weight(weight: Weight) -> String {
    if weight.fract() == 0.0 && weight.abs() < 1e15 {
        format!("{}", weight as i64)
    } else {
        format!("{}", weight)
    }
}
