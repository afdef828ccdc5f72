use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use remora::{Graph, GraphError, Settings, codec};

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Why a single menu command stopped. `BadNumber`, `Graph` and `Core` are
/// printed and the menu loop continues; `Io` and `Eof` end the session.
enum CommandError {
    BadNumber,
    Graph(GraphError),
    Core(remora::Error),
    Io(std::io::Error),
    Eof,
}

impl From<GraphError> for CommandError {
    fn from(value: GraphError) -> Self {
        Self::Graph(value)
    }
}

impl From<remora::Error> for CommandError {
    fn from(value: remora::Error) -> Self {
        Self::Core(value)
    }
}

#[derive(Debug)]
struct Args {
    settings: PathBuf,
}

fn usage() -> &'static str {
    "remora\n\
\n\
USAGE:\n\
  remora [--settings <path>]\n\
\n\
NOTES:\n\
  - The settings file defaults to ./settings.properties.\n\
  - It holds `input = '<path>'` and `output = '<path>'` lines; the paths are\n\
    read lazily by the load and save menu commands.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut settings: Option<PathBuf> = None;

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "--settings" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                settings = Some(PathBuf::from(path));
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if settings.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                settings = Some(PathBuf::from(path));
            }
        }
    }

    Ok(Args {
        settings: settings.unwrap_or_else(|| PathBuf::from("./settings.properties")),
    })
}

fn print_menu() {
    println!("==============================================");
    println!("1. Get the number of vertices");
    println!("2. Parse the set of vertices");
    println!("3. Find if there is an edge between 2 vertices");
    println!("4. Get the degree for a vertex");
    println!("5. Parse the outbound edges of a vertex");
    println!("6. Parse the inbound edges of a vertex");
    println!("7. Get cost for edge");
    println!("8. Update cost for edge");
    println!("9. Add edge");
    println!("10. Remove edge");
    println!("11. Add vertex");
    println!("12. Remove vertex");
    println!("13. Load from file");
    println!("14. Save to file");
    println!("15. Create a random graph");
    println!("16. Exit");
}

fn read_line(input: &mut impl BufRead) -> Result<String, CommandError> {
    let mut buf = String::new();
    match input.read_line(&mut buf) {
        Ok(0) => Err(CommandError::Eof),
        Ok(_) => Ok(buf),
        Err(err) => Err(CommandError::Io(err)),
    }
}

fn prompt(input: &mut impl BufRead, text: &str) -> Result<String, CommandError> {
    print!("{text}");
    let _ = std::io::stdout().flush();
    read_line(input)
}

fn prompt_int(input: &mut impl BufRead, text: &str) -> Result<i64, CommandError> {
    let line = prompt(input, text)?;
    line.trim().parse().map_err(|_| CommandError::BadNumber)
}

fn prompt_count(input: &mut impl BufRead, text: &str) -> Result<usize, CommandError> {
    let line = prompt(input, text)?;
    line.trim().parse().map_err(|_| CommandError::BadNumber)
}

struct Shell {
    graph: Graph,
    settings_path: PathBuf,
}

impl Shell {
    fn new(settings_path: PathBuf) -> Self {
        Self {
            graph: Graph::new(),
            settings_path,
        }
    }

    fn run(&mut self, input: &mut impl BufRead) -> Result<(), CliError> {
        loop {
            print_menu();
            let choice = match prompt(input, "> ") {
                Ok(line) => line,
                Err(CommandError::Io(err)) => return Err(err.into()),
                Err(_) => return Ok(()),
            };
            let Ok(choice) = choice.trim().parse::<u32>() else {
                println!("Invalid choice");
                continue;
            };
            if choice == 16 {
                return Ok(());
            }

            match self.dispatch(choice, input) {
                Ok(()) => {}
                Err(CommandError::BadNumber) => {
                    println!("Invalid numerical value. Make sure you've entered an integer");
                }
                Err(CommandError::Graph(err)) => println!("Graph error: {err}"),
                Err(CommandError::Core(err)) => println!("{err}"),
                Err(CommandError::Io(err)) => return Err(err.into()),
                Err(CommandError::Eof) => return Ok(()),
            }
        }
    }

    fn dispatch(&mut self, choice: u32, input: &mut impl BufRead) -> Result<(), CommandError> {
        match choice {
            1 => self.vertex_count(),
            2 => self.list_vertices(),
            3 => self.edge_exists(input),
            4 => self.degree(input),
            5 => self.outbound(input),
            6 => self.inbound(input),
            7 => self.get_cost(input),
            8 => self.update_cost(input),
            9 => self.add_edge(input),
            10 => self.remove_edge(input),
            11 => self.add_vertex(input),
            12 => self.remove_vertex(input),
            13 => self.load(),
            14 => self.save(),
            15 => self.create_random(input),
            _ => {
                println!("Invalid choice");
                Ok(())
            }
        }
    }

    fn vertex_count(&self) -> Result<(), CommandError> {
        println!(
            "The total number of vertices in the graph is {}",
            self.graph.vertex_count()
        );
        Ok(())
    }

    fn list_vertices(&self) -> Result<(), CommandError> {
        println!("The vertices in the graph are: ");
        for vertex in self.graph.vertices() {
            println!("{vertex}");
        }
        Ok(())
    }

    fn edge_exists(&self, input: &mut impl BufRead) -> Result<(), CommandError> {
        let start = prompt_int(input, "Enter the start vertex: ")?;
        let end = prompt_int(input, "Enter the end vertex: ")?;
        if self.graph.has_edge(start, end)? {
            println!("The edge between the vertices exists");
        } else {
            println!("There is no edge between the vertices");
        }
        Ok(())
    }

    fn degree(&self, input: &mut impl BufRead) -> Result<(), CommandError> {
        let vertex = prompt_int(input, "Enter vertex: ")?;
        let (in_degree, out_degree) = self.graph.degree(vertex)?;
        println!(
            "The in-degree for vertex {vertex} is {in_degree} and the out-degree is {out_degree}"
        );
        Ok(())
    }

    fn outbound(&self, input: &mut impl BufRead) -> Result<(), CommandError> {
        let vertex = prompt_int(input, "Enter vertex: ")?;
        let vertices: Vec<_> = self.graph.successors(vertex)?.collect();
        println!("The outbound edges of vertex {vertex} are: {vertices:?}");
        Ok(())
    }

    fn inbound(&self, input: &mut impl BufRead) -> Result<(), CommandError> {
        let vertex = prompt_int(input, "Enter vertex: ")?;
        let vertices: Vec<_> = self.graph.predecessors(vertex)?.collect();
        println!("The inbound edges of vertex {vertex} are: {vertices:?}");
        Ok(())
    }

    fn get_cost(&self, input: &mut impl BufRead) -> Result<(), CommandError> {
        let start = prompt_int(input, "Enter the start vertex: ")?;
        let end = prompt_int(input, "Enter the end vertex: ")?;
        let cost = self.graph.cost(start, end)?;
        println!("The cost for the ({start}, {end}) edge is {cost}");
        Ok(())
    }

    fn update_cost(&mut self, input: &mut impl BufRead) -> Result<(), CommandError> {
        let start = prompt_int(input, "Enter the start vertex: ")?;
        let end = prompt_int(input, "Enter the end vertex: ")?;
        let cost = prompt_int(input, "Enter the new edge cost: ")?;
        self.graph.set_cost(start, end, cost)?;
        Ok(())
    }

    fn add_edge(&mut self, input: &mut impl BufRead) -> Result<(), CommandError> {
        let start = prompt_int(input, "Enter start vertex: ")?;
        let end = prompt_int(input, "Enter end vertex: ")?;
        let cost = prompt_int(input, "Enter edge cost: ")?;
        self.graph.add_edge(start, end, cost)?;
        Ok(())
    }

    fn remove_edge(&mut self, input: &mut impl BufRead) -> Result<(), CommandError> {
        let start = prompt_int(input, "Enter the start vertex: ")?;
        let end = prompt_int(input, "Enter the end vertex: ")?;
        self.graph.remove_edge(start, end)?;
        Ok(())
    }

    fn add_vertex(&mut self, input: &mut impl BufRead) -> Result<(), CommandError> {
        let vertex = prompt_int(input, "Enter vertex: ")?;
        self.graph.add_vertex(vertex);
        Ok(())
    }

    fn remove_vertex(&mut self, input: &mut impl BufRead) -> Result<(), CommandError> {
        let vertex = prompt_int(input, "Enter vertex number: ")?;
        self.graph.remove_vertex(vertex)?;
        Ok(())
    }

    fn load(&mut self) -> Result<(), CommandError> {
        let settings = Settings::from_path(&self.settings_path)?;
        let started = Instant::now();
        self.graph = codec::load(settings.input()?)?;
        println!(
            "Execution time: {:.6} seconds",
            started.elapsed().as_secs_f64()
        );
        println!("Graph loaded from file");
        Ok(())
    }

    fn save(&self) -> Result<(), CommandError> {
        let settings = Settings::from_path(&self.settings_path)?;
        codec::save(&self.graph, settings.output()?)?;
        println!("Graph saved to file");
        Ok(())
    }

    fn create_random(&mut self, input: &mut impl BufRead) -> Result<(), CommandError> {
        let vertices = prompt_count(input, "Enter the number of vertices: ")?;
        let edges = prompt_count(input, "Enter the number of edges: ")?;
        if edges > vertices.saturating_mul(vertices) {
            println!("Cannot fit {edges} distinct edges on {vertices} vertices");
            return Ok(());
        }
        self.graph.create_random(vertices, edges);
        println!("Graph created successfully");
        Ok(())
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    Shell::new(args.settings).run(&mut input)
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt::init();

    match run(args) {
        Ok(()) => {}
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
