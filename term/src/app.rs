use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use teeko_core::{ActivateOutcome, TeekoEngine};

use crate::config::TermConfig;
use crate::input::{self, Command};
use crate::render;

/// Raw mode and the alternate screen, undone on drop even when the game errors out.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn enter(out: &mut impl Write) -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self;
        execute!(out, EnterAlternateScreen, Hide)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Flow {
    GameOver,
    Quit,
}

pub struct App<W: Write> {
    out: W,
    engine: TeekoEngine,
    config: TermConfig,
}

impl<W: Write> App<W> {
    pub fn new(out: W, config: TermConfig) -> Self {
        Self {
            out,
            engine: TeekoEngine::new(),
            config,
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        if self.config.show_start_screen {
            render::draw_start_screen(&mut self.out)?;
            if input::is_quit(wait_for_key()?) {
                return Ok(());
            }
        }

        loop {
            self.new_game()?;
            if self.play()? == Flow::Quit {
                log::info!("quit");
                return Ok(());
            }

            self.log_final_position();
            render::draw_game_over(&mut self.out)?;
            if input::is_quit(wait_for_key()?) {
                return Ok(());
            }
        }
    }

    fn new_game(&mut self) -> io::Result<()> {
        self.engine.new_game();
        drain_events()
    }

    fn play(&mut self) -> io::Result<Flow> {
        let flash_interval = self.config.flash_interval();
        let mut last_flash = Instant::now();
        let mut dirty = true;

        loop {
            if dirty {
                render::draw_game(&mut self.out, &self.engine)?;
                dirty = false;
            }
            if self.engine.is_finished() {
                return Ok(Flow::GameOver);
            }

            if event::poll(self.config.poll_interval())? {
                if let Event::Key(key) = event::read()? {
                    match input::command_for(key) {
                        Some(Command::Move(dx, dy)) => {
                            if self.engine.move_cursor(dx, dy) {
                                if !self.engine.is_cursor_visible() {
                                    self.engine.flash_cursor();
                                }
                                last_flash = Instant::now();
                                dirty = true;
                            }
                        }
                        Some(Command::Activate) => {
                            let outcome = self.engine.activate();
                            log::trace!("activate at {:?}: {outcome:?}", self.engine.cursor());
                            dirty |= outcome.has_update();
                            if let ActivateOutcome::Won(winner) = outcome {
                                log::info!("game over, {winner} wins");
                            }
                        }
                        Some(Command::NewGame) => {
                            self.new_game()?;
                            last_flash = Instant::now();
                            dirty = true;
                        }
                        Some(Command::Quit) => return Ok(Flow::Quit),
                        None => {}
                    }
                }
            }

            if last_flash.elapsed() >= flash_interval {
                self.engine.flash_cursor();
                last_flash = Instant::now();
                dirty = true;
            }
        }
    }

    fn log_final_position(&self) {
        match serde_json::to_string(&self.engine) {
            Ok(json) => log::debug!("final position: {json}"),
            Err(err) => log::warn!("could not serialize final position: {err}"),
        }
    }
}

fn is_press(key: &KeyEvent) -> bool {
    key.kind != KeyEventKind::Release
}

/// Blocks until a key is pressed.
fn wait_for_key() -> io::Result<KeyEvent> {
    loop {
        if let Event::Key(key) = event::read()?
            && is_press(&key)
        {
            return Ok(key);
        }
    }
}

/// Drops any input queued up before the new game started.
fn drain_events() -> io::Result<()> {
    let mut dropped = 0usize;
    while event::poll(Duration::ZERO)? {
        event::read()?;
        dropped += 1;
    }
    if dropped > 0 {
        log::trace!("dropped {dropped} pending events");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::terminal::is_raw_mode_enabled;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::ErrorKind::BrokenPipe.into())
        }
    }

    #[test]
    fn failed_setup_leaves_raw_mode_off() {
        assert!(TerminalGuard::enter(&mut BrokenPipe).is_err());
        assert!(!is_raw_mode_enabled().unwrap());
    }
}
