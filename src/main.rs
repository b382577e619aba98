use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy::assets::Assets;
use flappy::audio::{self, SoundSink};
use flappy::build_info;
use flappy::config::{parse_args, Command, USAGE};
use flappy::constants::*;
use flappy::game::{frame, FrameInput, Game, GameEvent};
use flappy::input::{map_event, InputAction};
use flappy::logging;
use flappy::ui::draw_ui;
use ratatui::backend::Backend;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    let command = match parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'flappy --help' for usage.");
            std::process::exit(1);
        }
    };

    let options = match command {
        Command::Version => {
            println!("{}", build_info::version_line());
            return Ok(());
        }
        Command::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
        Command::Play(options) => options,
    };

    let config = match options.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Could not load config: {}", e);
            std::process::exit(1);
        }
    };
    logging::init(options.log_path.as_deref())?;

    let assets = Assets::load();
    let mut game = Game::new(config);
    let mut sound = audio::sink_for(game.config.sound);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut game, &assets, sound.as_mut());

    // Cleanup terminal, even when the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        log::error!("game loop failed: {}", e);
    }
    log::info!("exiting, best score {}", game.run.best.max(game.run.score));
    result
}

/// Draw, read input, then step the simulation at a fixed rate until quit.
fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    game: &mut Game,
    assets: &Assets,
    sound: &mut dyn SoundSink,
) -> io::Result<()> {
    let theme = game.config.theme;
    let mut pending = FrameInput::default();
    let mut accumulator = 0.0f32;
    let mut last_step = Instant::now();

    loop {
        terminal.draw(|f| draw_ui(f, game, assets, theme))?;
        let screen = terminal.size()?;

        if event::poll(Duration::from_millis(REALTIME_FRAME_MS))? {
            loop {
                match map_event(&event::read()?, screen, game.run.dead) {
                    InputAction::Quit => return Ok(()),
                    InputAction::Game(input) => pending.merge(input),
                    InputAction::None => {}
                }
                if !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }

        let now = Instant::now();
        accumulator += now.duration_since(last_step).as_secs_f32();
        last_step = now;

        let mut steps = 0;
        while accumulator >= SIM_DT && steps < MAX_STEPS_PER_FRAME {
            let input = std::mem::take(&mut pending);
            let events = frame(game, &input, SIM_DT);
            for event in &events {
                if !matches!(event, GameEvent::Jumped) {
                    log::debug!("{:?}", event);
                }
            }
            sound.play_events(&events)?;
            accumulator -= SIM_DT;
            steps += 1;
        }
        // Drop the backlog after a stall rather than fast-forwarding through it.
        if steps == MAX_STEPS_PER_FRAME {
            accumulator = accumulator.min(SIM_DT);
        }
    }
}
