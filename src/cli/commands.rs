//! 控制台命令处理
//!
//! 解析并执行行式命令，多条命令用 `;` 分隔

use super::printer::{PrintStyle, Printer};
use crate::config::AnyGraph;
use crate::error::{Error, Result};
use crate::types::{VertexId, Weight};
use tracing::debug;

/// 控制台命令执行结果
#[derive(Debug, PartialEq)]
pub enum CommandResult {
    /// 继续运行
    Continue,
    /// 退出程序
    Exit,
    /// 显示消息
    Message(String),
    /// 错误
    Error(String),
}

/// 已解析的命令
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddVertex(VertexId),
    AddEdge {
        from: VertexId,
        to: VertexId,
        weight: Option<Weight>,
    },
    RemoveEdge(VertexId, VertexId),
    HasEdge(VertexId, VertexId),
    Neighbours(VertexId),
    Weight(VertexId, VertexId),
    Print(PrintStyle),
    Stats { json: bool },
    Help,
    Quit,
    Empty,
}

/// 解析单条命令
pub fn parse_command(input: &str) -> Result<Command> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    let Some(first) = parts.first() else {
        return Ok(Command::Empty);
    };
    let cmd = first.to_lowercase();
    let args = &parts[1..];

    let command = match cmd.as_str() {
        "vertex" | "v" => {
            expect_args(&cmd, args, 1, 1)?;
            Command::AddVertex(parse_vertex(args[0])?)
        }
        "edge" | "e" => {
            expect_args(&cmd, args, 2, 3)?;
            let weight = match args.get(2) {
                Some(w) => Some(parse_weight(w)?),
                None => None,
            };
            Command::AddEdge {
                from: parse_vertex(args[0])?,
                to: parse_vertex(args[1])?,
                weight,
            }
        }
        "remove" | "rm" => {
            expect_args(&cmd, args, 2, 2)?;
            Command::RemoveEdge(parse_vertex(args[0])?, parse_vertex(args[1])?)
        }
        "has" => {
            expect_args(&cmd, args, 2, 2)?;
            Command::HasEdge(parse_vertex(args[0])?, parse_vertex(args[1])?)
        }
        "neighbours" | "neighbors" | "n" => {
            expect_args(&cmd, args, 1, 1)?;
            Command::Neighbours(parse_vertex(args[0])?)
        }
        "weight" | "w" => {
            expect_args(&cmd, args, 2, 2)?;
            Command::Weight(parse_vertex(args[0])?, parse_vertex(args[1])?)
        }
        "print" | "p" => {
            expect_args(&cmd, args, 0, 1)?;
            let style = match args.first().map(|a| a.to_lowercase()) {
                None => PrintStyle::Auto,
                Some(a) if a == "list" => PrintStyle::List,
                Some(a) if a == "matrix" => PrintStyle::Matrix,
                Some(a) => {
                    return Err(Error::CommandError(format!(
                        "未知的打印风格: {}（可选 list, matrix）",
                        a
                    )))
                }
            };
            Command::Print(style)
        }
        "stats" | "info" => match args.first().map(|a| a.to_lowercase()) {
            None => Command::Stats { json: false },
            Some(a) if a == "json" => Command::Stats { json: true },
            Some(a) => return Err(Error::CommandError(format!("stats 不支持参数: {}", a))),
        },
        "help" | "h" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => {
            return Err(Error::CommandError(format!(
                "未知命令: {}，输入 help 查看帮助",
                other
            )))
        }
    };
    Ok(command)
}

fn expect_args(cmd: &str, args: &[&str], min: usize, max: usize) -> Result<()> {
    if args.len() < min || args.len() > max {
        return Err(Error::CommandError(format!(
            "{} 需要 {} 个参数，实际 {} 个",
            cmd,
            if min == max {
                min.to_string()
            } else {
                format!("{}-{}", min, max)
            },
            args.len()
        )));
    }
    Ok(())
}

fn parse_vertex(s: &str) -> Result<VertexId> {
    s.parse::<VertexId>()
        .map_err(|_| Error::CommandError(format!("无效的顶点编号: {}", s)))
}

fn parse_weight(s: &str) -> Result<Weight> {
    match s.parse::<Weight>() {
        Ok(w) if w.is_finite() => Ok(w),
        _ => Err(Error::CommandError(format!("无效的权重: {}", s))),
    }
}

/// 在图上执行已解析的命令
fn run(command: Command, graph: &mut AnyGraph, printer: &Printer) -> Result<CommandResult> {
    let result = match command {
        Command::AddVertex(v) => {
            graph.add_vertex(v)?;
            CommandResult::Continue
        }
        Command::AddEdge { from, to, weight } => {
            let g = graph.as_graph_mut();
            match weight {
                Some(w) => g.add_edge(from, to, w)?,
                None => g.add_unweighted_edge(from, to)?,
            }
            CommandResult::Continue
        }
        Command::RemoveEdge(from, to) => {
            if graph.as_graph_mut().remove_edge(from, to)? {
                CommandResult::Continue
            } else {
                CommandResult::Message(format!("({}, {}) 之间没有边", from, to))
            }
        }
        Command::HasEdge(from, to) => {
            CommandResult::Message(graph.as_graph().has_edge(from, to)?.to_string())
        }
        Command::Neighbours(v) => {
            let neighbours = graph.as_graph().neighbours(v)?;
            let list: Vec<String> = neighbours.iter().map(|n| n.to_string()).collect();
            CommandResult::Message(format!("[{}]", list.join(", ")))
        }
        Command::Weight(from, to) => CommandResult::Message(super::printer::format_weight(
            graph.as_graph().weight(from, to)?,
        )),
        Command::Print(PrintStyle::Auto) => {
            CommandResult::Message(printer.print_graph(graph.as_graph()))
        }
        Command::Print(style) => {
            CommandResult::Message(Printer::new(style).print_graph(graph.as_graph()))
        }
        Command::Stats { json } => {
            let snapshot = graph.as_graph().snapshot();
            if json {
                CommandResult::Message(snapshot.to_json()?)
            } else {
                CommandResult::Message(printer.print_stats(&snapshot))
            }
        }
        Command::Help => CommandResult::Message(Printer::print_help()),
        Command::Quit => CommandResult::Exit,
        Command::Empty => CommandResult::Continue,
    };
    Ok(result)
}

/// 解析并执行单条命令
pub fn execute_command(input: &str, graph: &mut AnyGraph, printer: &Printer) -> CommandResult {
    debug!(input, "执行命令");
    match parse_command(input).and_then(|cmd| run(cmd, graph, printer)) {
        Ok(result) => result,
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

/// 执行以 `;` 分隔的多条命令，遇到错误或退出时停止
pub fn execute_script(script: &str, graph: &mut AnyGraph, printer: &Printer) -> Vec<CommandResult> {
    let mut results = Vec::new();
    for line in script.split(';') {
        let result = execute_command(line, graph, printer);
        let stop = matches!(result, CommandResult::Exit | CommandResult::Error(_));
        results.push(result);
        if stop {
            break;
        }
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GraphConfig;

    fn list_graph() -> AnyGraph {
        GraphConfig::list(false, true).build().unwrap()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command("  ").unwrap(), Command::Empty);
        assert_eq!(parse_command("v -3").unwrap(), Command::AddVertex(-3));
        assert_eq!(
            parse_command("EDGE 1 2 0.5").unwrap(),
            Command::AddEdge {
                from: 1,
                to: 2,
                weight: Some(0.5)
            }
        );
        assert_eq!(
            parse_command("edge 1 2").unwrap(),
            Command::AddEdge {
                from: 1,
                to: 2,
                weight: None
            }
        );
        assert_eq!(parse_command("print").unwrap(), Command::Print(PrintStyle::Auto));
        assert_eq!(
            parse_command("p Matrix").unwrap(),
            Command::Print(PrintStyle::Matrix)
        );
        assert_eq!(
            parse_command("stats json").unwrap(),
            Command::Stats { json: true }
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_command("edge 1"), Err(Error::CommandError(_))));
        assert!(matches!(parse_command("edge a b"), Err(Error::CommandError(_))));
        assert!(matches!(parse_command("edge 1 2 NaN"), Err(Error::CommandError(_))));
        assert!(matches!(parse_command("bfs 0"), Err(Error::CommandError(_))));
        assert!(matches!(parse_command("print csr"), Err(Error::CommandError(_))));
    }

    #[test]
    fn test_execute_script() {
        let mut graph = list_graph();
        let printer = Printer::default();

        let results = execute_script(
            "edge 0 1 2; edge 0 2; neighbours 0; weight 1 0; has 2 1",
            &mut graph,
            &printer,
        );
        assert_eq!(
            results,
            vec![
                CommandResult::Continue,
                CommandResult::Continue,
                CommandResult::Message("[1, 2]".to_string()),
                CommandResult::Message("2".to_string()),
                CommandResult::Message("false".to_string()),
            ]
        );
        assert_eq!(graph.as_graph().edge_count(), 2);
    }

    #[test]
    fn test_execute_stops_on_error() {
        let mut graph = list_graph();
        let printer = Printer::default();

        let results = execute_script("edge 0 1; remove 0 9; edge 5 6", &mut graph, &printer);
        assert_eq!(results.len(), 2);
        assert!(matches!(results[1], CommandResult::Error(_)));
        assert_eq!(graph.as_graph().edge_count(), 1);
    }

    #[test]
    fn test_execute_on_matrix() {
        let mut graph = GraphConfig::matrix(4, false, false).build().unwrap();
        let printer = Printer::default();

        assert!(matches!(
            execute_command("vertex 1", &mut graph, &printer),
            CommandResult::Error(_)
        ));
        assert!(matches!(
            execute_command("edge 0 4", &mut graph, &printer),
            CommandResult::Error(_)
        ));
        assert_eq!(
            execute_command("remove 0 1", &mut graph, &printer),
            CommandResult::Message("(0, 1) 之间没有边".to_string())
        );
        assert_eq!(execute_command("quit", &mut graph, &printer), CommandResult::Exit);
    }

    #[test]
    fn test_execute_print_styles() {
        let mut graph = GraphConfig::matrix(2, true, false).build().unwrap();
        let printer = Printer::default();
        execute_command("edge 0 1", &mut graph, &printer);

        assert_eq!(
            execute_command("print list", &mut graph, &printer),
            CommandResult::Message("Vertex 0:\nEdge: (1, 1)\nVertex 1:\n".to_string())
        );
        match execute_command("print", &mut graph, &printer) {
            CommandResult::Message(table) => assert!(table.contains('│')),
            other => panic!("expected table output, got {:?}", other),
        }
    }
}
