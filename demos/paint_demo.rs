//! Paint demo: drive a session through the command protocol and print it.

use textel::{Command, Reply, Session};

fn main() {
    let script = [
        "I 20 6",
        "K 2 2 7 5 #",
        "H 10 18 3 =",
        "V 10 3 6 |",
        "L 19 1 *",
        "F 1 1 .",
        "P",
    ];

    let mut session = Session::new();
    for line in script {
        println!("> {line}");
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match Command::parse(&tokens).and_then(|command| session.execute(command)) {
            Ok(Reply::Image(text)) => println!("{text}"),
            Ok(_) => {}
            Err(err) => println!("error ({}): {err}", err.category()),
        }
    }
}
