//! Terminal front end: renders worker events and forwards selection input.
//!
//! Stands in for the original desktop window. The display is an append-only
//! line log; category selection is typed on stdin instead of picked from a
//! dropdown.

use std::io::BufRead;
use std::sync::mpsc::{Receiver, Sender};

use crate::message::{Control, Event};

/// Run the display loop until the worker closes the event channel.
pub fn run_display(events: Receiver<Event>) {
    for event in events {
        match event {
            Event::Display(line) => println!("{line}"),
            Event::Categories(categories) => {
                if categories.is_empty() {
                    println!("No categories available");
                } else {
                    println!("Categories: {}", categories.join(", "));
                }
            }
        }
    }
}

/// Read selection input lines from stdin and feed the control channel.
///
/// Each non-empty line selects a category; end of input requests shutdown.
pub fn run_input(control: Sender<Control>) {
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if control
            .send(Control::SelectCategory(line.to_string()))
            .is_err()
        {
            return;
        }
    }
    let _ = control.send(Control::Shutdown);
}
