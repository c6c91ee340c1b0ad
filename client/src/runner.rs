use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tictactoe_engine::tictactoe::{ComputerMoveTicket, GameEvent, TicTacToeSession};
use tictactoe_engine::{SessionRng, log};

use crate::command::{HELP, InputCommand};
use crate::config::ClientConfig;
use crate::renderer::ConsoleRenderer;

type Session = TicTacToeSession<UnboundedSender<GameEvent>>;

pub async fn run_tictactoe_game(config: &ClientConfig) -> Result<(), String> {
    let rng = match config.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Starting session with seed {}", rng.seed());

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let (ticket_tx, mut ticket_rx) = mpsc::unbounded_channel::<ComputerMoveTicket>();
    let thinking_delay = Duration::from_millis(config.thinking_delay_ms);

    let mut session: Session = TicTacToeSession::new(config.session_settings(), rng, event_tx);
    let mut renderer = ConsoleRenderer::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", HELP);
    session.announce();
    schedule_computer_move(&mut session, &ticket_tx, thinking_delay);
    redraw(&mut renderer, &mut event_rx);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let line = match line {
                    Ok(Some(line)) => line,
                    Ok(None) => break,
                    Err(e) => return Err(format!("Failed to read input: {}", e)),
                };
                match line.parse::<InputCommand>() {
                    Ok(InputCommand::Quit) => break,
                    Ok(InputCommand::Help) => println!("{}", HELP),
                    Ok(command) => handle_command(&mut session, command),
                    Err(e) => println!("{}", e),
                }
            }
            Some(ticket) = ticket_rx.recv() => {
                if let Err(e) = session.play_computer_turn(ticket) {
                    log!("Computer move not applied: {}", e);
                }
            }
        }

        schedule_computer_move(&mut session, &ticket_tx, thinking_delay);
        redraw(&mut renderer, &mut event_rx);
    }

    log!("Leaving after {} finished rounds", session.score().total());
    Ok(())
}

fn handle_command(session: &mut Session, command: InputCommand) {
    match command {
        InputCommand::CellSelected(index) => {
            if let Err(e) = session.cell_selected(index) {
                println!("{}", e);
            }
        }
        InputCommand::ModeSelected(mode) => session.set_mode(mode),
        InputCommand::DifficultySelected(difficulty) => session.set_difficulty(difficulty),
        InputCommand::Reset => session.reset_round(),
        InputCommand::NewGame => session.new_game(),
        InputCommand::Help | InputCommand::Quit => {}
    }
}

/// The engine does no timing; the pause before the computer answers lives
/// here. A ticket that arrives after a restart is refused by the session.
fn schedule_computer_move(
    session: &mut Session,
    ticket_tx: &UnboundedSender<ComputerMoveTicket>,
    delay: Duration,
) {
    let Some(ticket) = session.begin_computer_turn() else {
        return;
    };

    let ticket_tx = ticket_tx.clone();
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let _ = ticket_tx.send(ticket);
    });
}

fn redraw(renderer: &mut ConsoleRenderer, event_rx: &mut UnboundedReceiver<GameEvent>) {
    let mut changed = false;
    while let Ok(event) = event_rx.try_recv() {
        renderer.apply(event);
        changed = true;
    }
    if changed {
        println!("\n{}", renderer.render());
    }
}
