//! Event loop: terminal input, animation ticks and redraws.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::Instant;

use crossterm::event::EventStream;
use futures::StreamExt;
use log::{debug, info, trace};
use stepbar::Toolbar;
use stepbar_tui::{
    Cell, HitMap, Input, Key, MaterialGlyphs, RenderTheme, Rgb, Terminal, ToolbarView, convert_event,
    render_toolbar,
};
use tokio::time::{Duration, MissedTickBehavior};

use crate::cli::CliArgs;
use crate::error::DemoError;

const TITLE: &str = "stepbar";
const HELP: &str = "click an icon · click the arrow to expand or collapse · q quit";
const LEFT: u16 = 2;

pub async fn run(args: CliArgs) -> Result<(), DemoError> {
    let config = args.config()?;
    let icons = args.load_icons()?;
    info!(
        "Starting with {} icons, batch size {}, icon width {}",
        icons.len(),
        config.batch_size,
        config.icon_width
    );

    let status: Rc<RefCell<Option<String>>> = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&status);
    let toolbar = Toolbar::new(icons, config)
        .with_grip(args.grip)
        .on_icon_clicked(move |action| {
            *sink.borrow_mut() = Some(format!("{action} was clicked!"));
        });

    let mut view = ToolbarView::new(toolbar);
    view.animator_mut().set_reduced_motion(args.reduced_motion);

    let theme = RenderTheme::default();
    let mut terminal = Terminal::new()?;
    let mut events = EventStream::new();

    let frame_duration = Duration::from_secs_f64(1.0 / f64::from(args.fps.max(1)));
    let mut animation_interval = tokio::time::interval(frame_duration);
    animation_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut last_tick = Instant::now();

    let mut hits = draw(&mut terminal, &view, &theme, status.borrow().as_deref())?;

    loop {
        let animating = view.is_animating();

        tokio::select! {
            maybe_event = events.next() => {
                let Some(event) = maybe_event else {
                    debug!("Event stream closed");
                    break;
                };
                let Some(input) = convert_event(event?) else {
                    continue;
                };
                trace!("Input: {:?}", input);

                match input {
                    Input::Key(Key::Char('q') | Key::Escape) => break,
                    Input::Click { x, y } => {
                        if let Some(target) = hits.hit_test(x, y).cloned() {
                            view.handle(&target);
                        }
                    }
                    Input::Resize { width, height } => {
                        debug!("Terminal resized to {}x{}", width, height);
                    }
                    Input::FocusGained | Input::FocusLost | Input::Key(_) => continue,
                }

                // Animations starting now measure their first frame from here.
                if !animating {
                    last_tick = Instant::now();
                }
            }

            _ = animation_interval.tick(), if animating => {
                let now = Instant::now();
                view.tick(now.duration_since(last_tick));
                last_tick = now;
            }
        }

        hits = draw(&mut terminal, &view, &theme, status.borrow().as_deref())?;
    }

    info!("Exiting");
    Ok(())
}

fn draw(
    terminal: &mut Terminal,
    view: &ToolbarView,
    theme: &RenderTheme,
    status: Option<&str>,
) -> io::Result<HitMap> {
    let frame = view.frame();
    terminal.draw(|buf| {
        let black = Rgb::default();
        for (col, ch) in (LEFT..).zip(TITLE.chars()) {
            buf.set(col, 1, Cell::new(ch).with_fg(theme.control).with_bg(black).with_bold(true));
        }
        buf.put_str(LEFT, 2, HELP, theme.grip, black);

        let hits = render_toolbar(&frame, &MaterialGlyphs, LEFT, 4, theme, buf);

        if let Some(status) = status {
            buf.put_str(LEFT, 6, status, theme.icon, black);
        }
        hits
    })
}
