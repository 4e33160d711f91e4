//! Waitline CLI - Command-line client for the Waitline HTTP API

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use reqwest::Method;
use serde::Deserialize;
use serde_json::{json, Value};
use tabled::{Table, Tabled};

const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

#[derive(Parser)]
#[command(name = "waitline-cli")]
#[command(about = "Waitline queue service CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// API base URL
    #[arg(long, env = "WAITLINE_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new queue
    Create {
        /// Display name (default: "Untitled")
        #[arg(short, long)]
        name: Option<String>,

        /// Free-text description
        #[arg(short, long)]
        description: Option<String>,

        /// Where the line is
        #[arg(short, long)]
        location: Option<String>,

        /// Estimated minutes per person (default: 5)
        #[arg(short, long)]
        time_per_person: Option<f64>,
    },

    /// Join a queue
    Join {
        /// Queue ID
        queue_id: String,

        /// Your name
        name: String,

        /// Phone number or e-mail
        #[arg(short, long)]
        contact: Option<String>,
    },

    /// Show a queue and everyone waiting in it
    Show {
        /// Queue ID
        queue_id: String,
    },

    /// Show who is next in line (does not remove them)
    Next {
        /// Queue ID
        queue_id: String,
    },

    /// Remove a person from a queue
    #[command(visible_alias = "leave")]
    Remove {
        /// Queue ID
        queue_id: String,

        /// Person ID
        person_id: String,
    },

    /// Close a queue to new joins
    End {
        /// Queue ID
        queue_id: String,
    },

    /// Show service status
    Status,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Person {
    id: String,
    name: String,
    joined_at: String,
    #[serde(default)]
    contact_info: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Queue {
    id: String,
    name: String,
    description: String,
    location: String,
    time_per_person: serde_json::Number,
    created_at: String,
    is_active: bool,
    people: Vec<Person>,
}

#[derive(Tabled)]
struct PersonRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Person ID")]
    id: String,
    #[tabled(rename = "Contact")]
    contact: String,
    #[tabled(rename = "Joined")]
    joined_at: String,
}

impl PersonRow {
    fn new(position: usize, person: &Person) -> Self {
        Self {
            position,
            name: person.name.clone(),
            id: person.id.clone(),
            contact: person.contact_info.clone(),
            joined_at: person.joined_at.clone(),
        }
    }
}

async fn call_api(
    base_url: &str,
    method: Method,
    path: &str,
    body: Option<Value>,
) -> Result<Value> {
    let url = format!("{}{}", base_url.trim_end_matches('/'), path);

    let client = reqwest::Client::new();
    let mut request = client.request(method, &url);
    if let Some(body) = body {
        request = request.json(&body);
    }

    let response = request
        .send()
        .await
        .context("Failed to connect to waitline server")?;
    let status = response.status();
    let payload: Value = response
        .json()
        .await
        .context("Failed to parse response")?;

    if !status.is_success() {
        let message = payload
            .get("error")
            .and_then(|v| v.as_str())
            .or_else(|| status.canonical_reason())
            .unwrap_or("request failed");
        anyhow::bail!("API error ({}): {}", status.as_u16(), message);
    }

    Ok(payload)
}

async fn fetch_queue(base_url: &str, queue_id: &str) -> Result<Queue> {
    let result = call_api(
        base_url,
        Method::GET,
        &format!("/api/get_queue/{}", queue_id),
        None,
    )
    .await?;
    Ok(serde_json::from_value(result)?)
}

fn print_queue(queue: &Queue) {
    let status = if queue.is_active {
        "OPEN".green()
    } else {
        "CLOSED".red()
    };

    println!(
        "{} {}",
        queue.name.cyan().bold(),
        format!("({})", queue.id).dimmed()
    );
    println!("  {} {}", "Status:".bold(), status);
    if !queue.description.is_empty() {
        println!("  {} {}", "Description:".bold(), queue.description);
    }
    if !queue.location.is_empty() {
        println!("  {} {}", "Location:".bold(), queue.location);
    }
    println!("  {} {} min", "Time per person:".bold(), queue.time_per_person);
    println!("  {} {}", "Created:".bold(), queue.created_at);
    println!("  {} {}", "Waiting:".bold(), queue.people.len());
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Create {
            name,
            description,
            location,
            time_per_person,
        } => {
            let mut body = serde_json::Map::new();
            if let Some(name) = name {
                body.insert("name".into(), json!(name));
            }
            if let Some(description) = description {
                body.insert("description".into(), json!(description));
            }
            if let Some(location) = location {
                body.insert("location".into(), json!(location));
            }
            if let Some(minutes) = time_per_person {
                body.insert("timePerPerson".into(), json!(minutes));
            }

            let result = call_api(
                &cli.api_url,
                Method::POST,
                "/api/create_queue",
                Some(Value::Object(body)),
            )
            .await?;
            let queue: Queue = serde_json::from_value(result)?;

            println!("{}", "✓ Queue created successfully".green().bold());
            println!();
            print_queue(&queue);
        }

        Commands::Join {
            queue_id,
            name,
            contact,
        } => {
            let params = json!({
                "queueId": queue_id,
                "name": name,
                "contactInfo": contact,
            });

            let result =
                call_api(&cli.api_url, Method::POST, "/api/join_queue", Some(params)).await?;
            let person: Person = serde_json::from_value(result["person"].clone())
                .context("No person in join response")?;

            println!(
                "{}",
                format!("✓ {} joined queue {}", person.name, queue_id)
                    .green()
                    .bold()
            );
            println!("  {} {}", "Person ID:".bold(), person.id);

            let queue = fetch_queue(&cli.api_url, &queue_id).await?;
            if let Some(index) = queue.people.iter().position(|p| p.id == person.id) {
                println!("  {} {}", "Position:".bold(), index + 1);
            }
        }

        Commands::Show { queue_id } => {
            let queue = fetch_queue(&cli.api_url, &queue_id).await?;
            print_queue(&queue);
            println!();

            if queue.people.is_empty() {
                println!("{}", "Nobody is waiting".yellow());
            } else {
                let rows: Vec<PersonRow> = queue
                    .people
                    .iter()
                    .enumerate()
                    .map(|(i, p)| PersonRow::new(i + 1, p))
                    .collect();
                println!("{}", Table::new(rows));
            }
        }

        Commands::Next { queue_id } => {
            let result = call_api(
                &cli.api_url,
                Method::POST,
                &format!("/api/call_next/{}", queue_id),
                None,
            )
            .await?;
            let person: Person = serde_json::from_value(result)?;

            println!("{}", "Next in line".cyan().bold());
            println!();
            println!("{}", Table::new(vec![PersonRow::new(1, &person)]));
        }

        Commands::Remove {
            queue_id,
            person_id,
        } => {
            let params = json!({
                "queueId": queue_id,
                "personId": person_id,
            });

            call_api(
                &cli.api_url,
                Method::POST,
                "/api/remove_person",
                Some(params),
            )
            .await?;

            println!(
                "{}",
                format!("✓ Person {} removed from queue {}", person_id, queue_id)
                    .green()
                    .bold()
            );
        }

        Commands::End { queue_id } => {
            call_api(
                &cli.api_url,
                Method::POST,
                &format!("/api/end_queue/{}", queue_id),
                None,
            )
            .await?;

            println!("{}", format!("✓ Queue {} closed", queue_id).green().bold());
        }

        Commands::Status => {
            println!("{}", "System Status".cyan().bold());
            println!();

            match call_api(&cli.api_url, Method::GET, "/api/stats", None).await {
                Ok(stats) => {
                    println!("  {} {}", "API URL:".bold(), cli.api_url);
                    println!("  {} {}", "Status:".bold(), "ONLINE".green());
                    println!();
                    println!("  {} {}", "Total Queues:".bold(), stats["totalQueues"]);
                    println!("  {} {}", "Active Queues:".bold(), stats["activeQueues"]);
                    println!("  {} {}", "People Waiting:".bold(), stats["waitingPeople"]);
                    println!("  {} {} seconds", "Uptime:".bold(), stats["uptimeSeconds"]);
                }
                Err(e) => {
                    println!("  {} {}", "Status:".bold(), "ERROR".red());
                    println!("  {} {}", "Error:".bold(), e);
                    return Err(e);
                }
            }
        }
    }

    Ok(())
}
