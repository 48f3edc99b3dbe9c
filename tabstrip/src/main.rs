//! `tabstrip`, a document workspace of tabs driven by line commands on stdin.
//!
//! The navigation stack is simulated in memory.  `back` and `forward` move through it,
//! and deliver the resulting navigation event to the workspace.

mod cli;
mod command;
mod render;

use command::Command;
use lifeline::{dyn_bus::DynBus, prelude::*};
use log::{debug, info, warn};
use postage::{sink::Sink, stream::Stream, watch};
use std::{path::Path, time::Duration};
use tabstrip_api::{
    config::{load_config, load_config_from, log_path, WorkspaceConfig},
    location::Location,
};
use tabstrip_workspace::{
    history::{MemoryHistory, NavigationEvent},
    message::{scroll::ScrollRestore, workspace::WorkspaceRecv},
    state::WorkspaceState,
    utils::await_condition,
    HistoryResource, WorkspaceBus, WorkspaceService,
};
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    runtime::Runtime,
};

pub fn main() -> anyhow::Result<()> {
    let args = cli::init();

    let level = tabstrip_api::log::parse_level(args.value_of("LOG"))?;
    let log_file = if args.is_present("LOG-FILE") {
        let path = log_path()?;
        if let Some(dotdir) = path.parent() {
            std::fs::create_dir_all(dotdir)?;
        }

        Some(path)
    } else {
        None
    };
    tabstrip_api::log::init(level, log_file.as_deref())?;
    log_panics::init();

    let mut config = match args.value_of("CONFIG") {
        Some(path) => load_config_from(Path::new(path))?,
        None => load_config()?,
    };

    if let Some(base_path) = args.value_of("BASE-PATH") {
        config.base_path = base_path.to_string();
    }

    info!("tabstrip runtime starting");

    let runtime = runtime()?;

    let result = runtime.block_on(async { main_async(config).await });

    runtime.shutdown_timeout(Duration::from_millis(25));

    result?;

    info!("tabstrip runtime stopped");

    Ok(())
}

/// Timers only.  Stdin is read on the blocking pool.
fn runtime() -> std::io::Result<Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_time()
        .build()
}

async fn main_async(config: WorkspaceConfig) -> anyhow::Result<()> {
    let history = MemoryHistory::new(Location::new(config.base_path.clone()));

    let bus = WorkspaceBus::default();
    bus.store_resource::<WorkspaceConfig>(config);
    bus.store_resource(HistoryResource::new(history.clone()));

    let _service = WorkspaceService::spawn(&bus)?;

    let mut tx = bus.tx::<WorkspaceRecv>()?;
    let mut rx_state = bus.rx::<Option<WorkspaceState>>()?;
    let rx_restore = bus.rx::<ScrollRestore>()?;
    let _restore = tokio::spawn(print_restores(rx_restore));

    let mut revision = apply(&mut tx, &mut rx_state, 0, WorkspaceRecv::Mount).await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                eprintln!("{}", err);
                continue;
            }
        };

        debug!("command: {:?}", command);

        match command {
            Command::Quit => break,
            Command::List => {
                let state = latest(&mut rx_state, revision).await?;
                print!("{}", render::tabs(&state));
            }
            Command::Closed => {
                let state = latest(&mut rx_state, revision).await?;
                print!("{}", render::closed(&state));
            }
            Command::Back => {
                revision = navigate(&mut tx, &mut rx_state, revision, history.back()).await?;
            }
            Command::Forward => {
                revision = navigate(&mut tx, &mut rx_state, revision, history.forward()).await?;
            }
            command => {
                if let Some(msg) = command.into_recv() {
                    revision = apply(&mut tx, &mut rx_state, revision, msg).await?;
                }
            }
        }
    }

    Ok(())
}

/// Sends the transition, then prints the state once it has been applied
async fn apply(
    tx: &mut (impl Sink<Item = WorkspaceRecv> + Unpin),
    rx_state: &mut watch::Receiver<Option<WorkspaceState>>,
    revision: u64,
    msg: WorkspaceRecv,
) -> anyhow::Result<u64> {
    tx.send(msg).await?;

    let state = latest(rx_state, revision + 1).await?;
    println!("{}", render::status(&state));

    Ok(state.revision)
}

async fn navigate(
    tx: &mut (impl Sink<Item = WorkspaceRecv> + Unpin),
    rx_state: &mut watch::Receiver<Option<WorkspaceState>>,
    revision: u64,
    event: Option<NavigationEvent>,
) -> anyhow::Result<u64> {
    match event {
        Some(event) => apply(tx, rx_state, revision, WorkspaceRecv::Navigate(event)).await,
        None => {
            eprintln!("the navigation stack has no entry in that direction");
            Ok(revision)
        }
    }
}

async fn latest(
    rx_state: &mut watch::Receiver<Option<WorkspaceState>>,
    revision: u64,
) -> anyhow::Result<WorkspaceState> {
    let state = await_condition(rx_state, |state| state.revision >= revision).await?;
    Ok(state)
}

async fn print_restores(mut rx: impl Stream<Item = ScrollRestore> + Unpin) {
    while let Some(restore) = rx.recv().await {
        match serde_yaml::to_string(&restore.value) {
            Ok(value) => println!(
                "restore scroll for {}: {}",
                restore.tab,
                value.trim_start_matches("---").trim()
            ),
            Err(err) => warn!("failed to render scroll offset for {}: {}", restore.tab, err),
        }
    }
}
