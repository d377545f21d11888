use std::{
    io,
    sync::{Arc, Mutex},
};

use drm_sink_info::{
    edid::{print_product_id, ProductId},
    utils::{LogPrinter, Printer},
};
use tracing::Level;

/// In-memory writer shared between the subscriber and the test
#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl io::Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl SharedBuf {
    /// Captured events as `(level, message)` pairs
    fn events(&self) -> Vec<(String, String)> {
        let out = String::from_utf8(self.0.lock().unwrap().clone()).unwrap();
        out.lines()
            .map(|line| {
                let (level, message) = line.trim_start().split_once(' ').unwrap();
                (level.to_string(), message.to_string())
            })
            .collect()
    }
}

fn capture(f: impl FnOnce()) -> Vec<(String, String)> {
    let buf = SharedBuf::default();
    let writer = buf.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .with_max_level(Level::TRACE)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    buf.events()
}

fn event(level: &str, message: &str) -> (String, String) {
    (level.to_string(), message.to_string())
}

#[test]
fn product_id_lines_are_prefixed_events() {
    let id = ProductId::from_bytes(&[0x10, 0xac, 0x12, 0x34, 0x01, 0x00, 0x00, 0x00, 20, 30]);
    let events = capture(|| {
        let mut printer = LogPrinter::new(Level::INFO).with_prefix("DP-1: ");
        print_product_id(&mut printer, &id, true);
        printer.print(format_args!("tail"));
    });

    assert_eq!(
        events,
        vec![
            event(
                "INFO",
                "DP-1: manufacturer name: DEL, product code: 13330, serial number: 1, week/year of manufacture: 20/2020"
            ),
            event("INFO", "DP-1: raw product id: 10 ac 12 34 01 00 00 00 14 1e"),
            // flushed when the printer is dropped
            event("INFO", "DP-1: tail"),
        ]
    );
}

#[test]
fn events_use_the_printer_level() {
    let events = capture(|| {
        let mut printer = LogPrinter::new(Level::DEBUG);
        printer.print(format_args!("first\nsec"));
        printer.print(format_args!("ond\n"));

        let mut printer = LogPrinter::new(Level::WARN).with_prefix("eDP-1: ");
        printer.print(format_args!("no sink"));
        printer.flush();
        printer.flush();
    });

    assert_eq!(
        events,
        vec![
            event("DEBUG", "first"),
            event("DEBUG", "second"),
            event("WARN", "eDP-1: no sink"),
        ]
    );
}
