use crate::output::{print_json, println_colored, Color};
use clap::Subcommand;
use devkit_core::known_hosts::{HostSet, Reconciler};
use devkit_core::paths::KnownHostsPaths;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Subcommand tree
// ---------------------------------------------------------------------------

#[derive(Subcommand)]
pub enum SshSubcommand {
    /// known_hosts
    KnownHosts {
        #[command(subcommand)]
        subcommand: KnownHostsSubcommand,
    },
}

#[derive(Subcommand)]
pub enum KnownHostsSubcommand {
    /// Show diff between ~/.ssh/known_hosts and ~/.ssh/known_hosts.db
    Diff,

    /// Replace ~/.ssh/known_hosts with ~/.ssh/known_hosts.db
    Reset,
}

#[derive(Serialize)]
struct DiffOutput<'a> {
    count: usize,
    hosts: &'a [String],
}

#[derive(Serialize)]
struct ResetOutput {
    written: usize,
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

pub fn run(subcommand: SshSubcommand, json: bool) -> anyhow::Result<()> {
    match subcommand {
        SshSubcommand::KnownHosts { subcommand } => run_known_hosts(subcommand, json),
    }
}

/// `None` when no home directory can be resolved; both commands then act on
/// nothing rather than failing.
fn reconciler() -> Option<Reconciler> {
    match KnownHostsPaths::resolve() {
        Ok(paths) => Some(Reconciler::new(paths)),
        Err(e) => {
            tracing::warn!("{e}");
            None
        }
    }
}

fn run_known_hosts(subcommand: KnownHostsSubcommand, json: bool) -> anyhow::Result<()> {
    match subcommand {
        KnownHostsSubcommand::Diff => {
            let new_hosts = reconciler().map(|r| r.diff()).unwrap_or_default();
            if json {
                print_json(&DiffOutput {
                    count: new_hosts.len(),
                    hosts: new_hosts.lines(),
                })?;
            } else {
                print_diff(&new_hosts);
            }
            Ok(())
        }

        KnownHostsSubcommand::Reset => {
            let written = reconciler().map(|r| r.reset()).unwrap_or(0);
            if json {
                print_json(&ResetOutput { written })?;
            } else {
                println_colored(&format!("{written} hosts written"), Color::Green);
            }
            Ok(())
        }
    }
}

fn print_diff(new_hosts: &HostSet) {
    if new_hosts.is_empty() {
        println_colored("No new hosts", Color::Green);
        return;
    }
    println_colored(&format!("New hosts ({})", new_hosts.len()), Color::Yellow);
    for line in new_hosts.iter() {
        println!("{line}");
    }
}
