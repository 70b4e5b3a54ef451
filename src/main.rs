use std::io::{self, BufRead, Write};

use clap::Parser;

use local_chess::session::{ClickOutcome, Session};
use local_chess::types::{Color, Square};

#[derive(Parser, Debug)]
#[command(name = "local_chess")]
#[command(about = "Two player chess on a shared terminal")]
struct Args {
    /// Draw pieces as letters instead of the unicode chess symbols
    #[arg(long)]
    ascii: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let mut session = Session::new();
    print_help();
    draw(&session, args.ascii);

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match line.trim() {
            "" => continue,
            "quit" | "exit" => break,
            "help" => {
                print_help();
                continue;
            }
            "reset" => session.reset(),
            "flip" => session.toggle_flip(),
            input => match Square::from_algebraic(input) {
                Some(square) => {
                    if let ClickOutcome::Applied {
                        winner: Some(color),
                    } = session.click(square)
                    {
                        println!("{} wins! King captured.", capitalized(color));
                    }
                }
                None => {
                    println!("Unrecognized command {input:?}. Type `help` for the command list.");
                    continue;
                }
            },
        }
        draw(&session, args.ascii);
    }
    Ok(())
}

fn capitalized(color: Color) -> &'static str {
    match color {
        Color::White => "White",
        Color::Black => "Black",
    }
}

fn print_help() {
    println!("Click squares by typing them: a square like `e2` selects a piece,");
    println!("a second square among the marked candidates (O moves, X captures)");
    println!("plays the move. Other commands: `reset`, `flip`, `help`, `quit`.");
}

fn draw(session: &Session, ascii: bool) {
    let board = session.board();
    let candidate_at = |square: Square| {
        session
            .selection()
            .and_then(|s| s.candidates.iter().find(|c| c.to == square))
    };

    let mut rows: Vec<u8> = (0..8).collect();
    let mut cols: Vec<u8> = (0..8).collect();
    if session.flipped() {
        rows.reverse();
        cols.reverse();
    }

    println!();
    for &row in &rows {
        print!("{} ", 8 - row);
        for &col in &cols {
            let square = Square { row, col };
            if let Some(candidate) = candidate_at(square) {
                print!(" {}", if candidate.capture { "X" } else { "O" });
            } else {
                match board.piece_at(square) {
                    Some(piece) if ascii => print!(" {}", piece.to_letter()),
                    Some(piece) => print!(" {}", piece.to_symbol()),
                    None => print!(" ."),
                }
            }
        }
        println!();
    }
    print!("  ");
    for &col in &cols {
        print!(" {}", (col + b'a') as char);
    }
    println!();

    if let Some(selection) = session.selection() {
        println!("Selected: {}", selection.square.to_algebraic());
    }
    println!("Turn: {}", capitalized(session.active_color()));
}
