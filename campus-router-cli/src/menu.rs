//! Interactive menu shell.
//!
//! All user-input validation lives here; the core only ever receives ids
//! that exist in the graph. Bad input reprompts instead of aborting.

use std::io::{self, BufRead, Write};

use campus_router_core::{
    CampusGraph, Error, Mode, NodeId, path_distance, path_duration, path_with_waypoints,
};

use crate::error::CliError;

struct RouteRequest {
    start: NodeId,
    end: NodeId,
    mode: Mode,
    waypoints: Vec<NodeId>,
}

pub fn run(graph: &CampusGraph) -> Result<(), CliError> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!();
        println!("Welcome to the Route Finder!");
        println!("1. Find shortest path automatically");
        println!("2. Find shortest path with specific waypoints");
        println!("3. Quit");

        let Some(choice) = read_line(&mut lines)? else {
            break;
        };
        match choice.trim() {
            "1" => query(graph, &mut lines, false)?,
            "2" => query(graph, &mut lines, true)?,
            "3" => {
                println!("Quitting the program. Have a great day!");
                break;
            }
            _ => println!("Invalid choice. Please choose 1, 2, or 3."),
        }
    }
    Ok(())
}

fn query<I>(graph: &CampusGraph, lines: &mut I, with_waypoints: bool) -> Result<(), CliError>
where
    I: Iterator<Item = io::Result<String>>,
{
    println!();
    println!("Landmarks:");
    for id in graph.node_ids() {
        println!("Node {id}: {}", graph.node_label(id)?);
    }

    let Some(request) = read_request(graph, lines, with_waypoints)? else {
        return Ok(());
    };

    match path_with_waypoints(
        graph,
        request.start,
        request.end,
        request.mode,
        &request.waypoints,
    ) {
        Ok(path) => render_path(graph, &path, &request)?,
        Err(Error::Unreachable { from, to }) => {
            println!("No route exists between Node {from} and Node {to}.");
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

/// Collects one route request. Invalid input prints the complaint and
/// returns `None`, sending the user back to the menu; `None` also means
/// end of input.
fn read_request<I>(
    graph: &CampusGraph,
    lines: &mut I,
    with_waypoints: bool,
) -> Result<Option<RouteRequest>, CliError>
where
    I: Iterator<Item = io::Result<String>>,
{
    let n = graph.node_count();

    let Some(input) = prompt(lines, "\nEnter the number for the start location: ")? else {
        return Ok(None);
    };
    let start = match parse_node_id(&input, n) {
        Ok(id) => id,
        Err(msg) => {
            println!("{msg}");
            return Ok(None);
        }
    };

    let Some(input) = prompt(lines, "Enter the number for the end location: ")? else {
        return Ok(None);
    };
    let end = match parse_node_id(&input, n) {
        Ok(id) => id,
        Err(msg) => {
            println!("{msg}");
            return Ok(None);
        }
    };

    println!("Select the mode of travel:");
    println!("1: Driving");
    println!("2: Walking");
    let Some(input) = read_line(lines)? else {
        return Ok(None);
    };
    let mode = match parse_mode(&input) {
        Ok(mode) => mode,
        Err(msg) => {
            println!("{msg}");
            return Ok(None);
        }
    };

    let waypoints = if with_waypoints {
        let Some(input) = prompt(
            lines,
            "Enter the numbers of waypoints to include, separated by commas (e.g., 1,3,5): ",
        )?
        else {
            return Ok(None);
        };
        match parse_waypoints(&input, n) {
            Ok(waypoints) => waypoints,
            Err(msg) => {
                println!("{msg}");
                return Ok(None);
            }
        }
    } else {
        Vec::new()
    };

    Ok(Some(RouteRequest {
        start,
        end,
        mode,
        waypoints,
    }))
}

fn render_path(graph: &CampusGraph, path: &[NodeId], request: &RouteRequest) -> Result<(), CliError> {
    println!();
    println!(
        "The shortest path from Node {} to Node {} is:",
        request.start, request.end
    );
    for &node in path {
        println!("Node {node}: {}", graph.node_label(node)?);
    }

    let distance = path_distance(graph, path, request.mode)?;
    let duration = path_duration(graph, path, request.mode)?;
    println!("Total distance: {distance:.2} km");
    println!("Total travel time: {}", format_duration(duration));
    Ok(())
}

fn read_line<I>(lines: &mut I) -> Result<Option<String>, CliError>
where
    I: Iterator<Item = io::Result<String>>,
{
    match lines.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None),
    }
}

fn prompt<I>(lines: &mut I, message: &str) -> Result<Option<String>, CliError>
where
    I: Iterator<Item = io::Result<String>>,
{
    print!("{message}");
    io::stdout().flush()?;
    read_line(lines)
}

fn parse_node_id(input: &str, node_count: usize) -> Result<NodeId, String> {
    let id: NodeId = input
        .trim()
        .parse()
        .map_err(|_| "Invalid input. Please enter a number.".to_string())?;
    if id >= node_count {
        return Err(format!(
            "Invalid input. Node {id} does not exist; choose 0 to {}.",
            node_count - 1
        ));
    }
    Ok(id)
}

fn parse_mode(input: &str) -> Result<Mode, String> {
    match input.trim() {
        "1" => Ok(Mode::Driving),
        "2" => Ok(Mode::Walking),
        _ => Err("Invalid input. Please choose 1 or 2.".to_string()),
    }
}

fn parse_waypoints(input: &str, node_count: usize) -> Result<Vec<NodeId>, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    trimmed
        .split(',')
        .map(|part| parse_node_id(part, node_count))
        .collect()
}

fn format_duration(minutes: f64) -> String {
    let total = minutes.round() as i64;
    if total >= 60 {
        format!("{} hour(s) {} min(s)", total / 60, total % 60)
    } else {
        format!("{total} min(s)")
    }
}
