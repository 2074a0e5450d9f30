use std::io;
use std::io::Write;
use std::sync::Arc;

use posty_core::session::ChatSession;
use posty_core::types::caller::Caller;

use crate::client::CliClient;
use crate::commands::{build_session, caller_for};
use crate::error::Result;
use crate::utils::render::{render_outcome, render_quota};

enum Input<'a> {
    Exit,
    Reset,
    Quota,
    Prompt(&'a str),
}

fn parse_input(line: &str) -> Input<'_> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
        Input::Exit
    } else if line.eq_ignore_ascii_case("reset") {
        Input::Reset
    } else if line.eq_ignore_ascii_case("quota") {
        Input::Quota
    } else {
        Input::Prompt(line)
    }
}

pub async fn handle(cli_client: Arc<CliClient>, user: Option<String>, local: bool) -> Result<()> {
    let session = build_session(cli_client, local);
    let caller = caller_for(user);

    match &caller {
        Caller::Guest => println!(
            "Guest session. {}",
            render_quota(session.guest_count())
        ),
        Caller::Member { user_id: Some(id) } => println!("Signed in as {id}."),
        Caller::Member { user_id: None } => println!("Signed in, posts will not be saved."),
    }
    println!("Describe your post idea ('reset' to clear, 'quota', 'exit' to quit):");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }

        match parse_input(&line) {
            Input::Exit => {
                println!("Exiting chat.");
                break;
            }
            Input::Reset => {
                session.reset()?;
                println!("Session cleared.");
            }
            Input::Quota => println!("{}", render_quota(session.guest_count())),
            Input::Prompt(prompt) => submit(&session, prompt, &caller).await?,
        }
    }
    Ok(())
}

async fn submit(session: &ChatSession, prompt: &str, caller: &Caller) -> Result<()> {
    if !prompt.is_empty() {
        println!("Generating…");
    }
    let outcome = session.generate(prompt, caller).await;
    print!("{}", render_outcome(&outcome));
    Ok(())
}
