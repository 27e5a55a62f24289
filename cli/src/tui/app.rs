// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::time::{Duration, Instant};
use std::{cell::RefCell, error::Error, io, rc::Rc};

use calview_core::{Clock, LocalClock};
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, KeyEventKind};
use ratatui::crossterm::execute;

use crate::config::Config;
use crate::tui::calendar_store::CalendarStore;
use crate::tui::component::{Component, Message};
use crate::tui::component_page::CalendarPage;
use crate::tui::dispatcher::Dispatcher;
use crate::tui::month_view::MonthView;
use crate::tui::range_view::RangeView;
use crate::tui::timers::Timers;

/// Upper bound on how long the loop blocks waiting for input.
const IDLE_POLL: Duration = Duration::from_millis(500);

/// Runs the interactive month grid until the user exits.
pub fn run_month_view(store: CalendarStore, config: &Config) -> Result<CalendarStore, Box<dyn Error>> {
    run_month_view_with(store, MonthView::new(config, LocalClock.now()))
}

/// Runs a month grid built by the caller, e.g. with a custom event renderer
/// or per-event styles.
pub fn run_month_view_with(
    store: CalendarStore,
    view: MonthView,
) -> Result<CalendarStore, Box<dyn Error>> {
    run_page(store, CalendarPage::new(view))
}

/// Runs the header row view of a day range until the user exits.
pub fn run_range_view(store: CalendarStore, config: &Config) -> Result<CalendarStore, Box<dyn Error>> {
    let view = RangeView::new(config, LocalClock.now());
    run_page(store, CalendarPage::new(view))
}

fn run_page<C: Component<CalendarStore>>(
    store: CalendarStore,
    mut page: C,
) -> Result<CalendarStore, Box<dyn Error>> {
    let store = Rc::new(RefCell::new(store));

    let mut terminal = ratatui::init();
    let result = {
        let mut dispatcher = Dispatcher::new();
        CalendarStore::register_to(store.clone(), &mut dispatcher);

        let mut timers = Timers::new();
        page.mount(&mut timers);
        let result = with_mouse_capture(|| {
            event_loop(&mut terminal, &mut page, &mut dispatcher, &mut timers, &store)
        });
        page.unmount(&mut timers);
        result
    }; // release dispatcher here to avoid borrow conflicts
    ratatui::restore();
    result?;

    let owned_store = Rc::try_unwrap(store)
        .map_err(|_| "Store still has references")?
        .into_inner();
    Ok(owned_store)
}

fn with_mouse_capture<T>(
    f: impl FnOnce() -> Result<T, Box<dyn Error>>,
) -> Result<T, Box<dyn Error>> {
    execute!(io::stdout(), EnableMouseCapture)?;
    let result = f();
    execute!(io::stdout(), DisableMouseCapture)?;
    result
}

fn event_loop<C: Component<CalendarStore>>(
    terminal: &mut DefaultTerminal,
    page: &mut C,
    dispatcher: &mut Dispatcher,
    timers: &mut Timers,
    store: &Rc<RefCell<CalendarStore>>,
) -> Result<(), Box<dyn Error>> {
    loop {
        let area = terminal
            .draw(|frame| page.render(store, frame.area(), frame.buffer_mut()))?
            .area;

        if event::poll(timers.poll_timeout(Instant::now(), IDLE_POLL))? {
            let msg = match event::read()? {
                event::Event::Key(key) if key.kind == KeyEventKind::Press => {
                    page.on_key(dispatcher, store, area, key.code)
                }
                event::Event::Mouse(mouse) => page.on_mouse(dispatcher, store, area, mouse),
                _ => None, // resize only needs the next frame
            };
            if msg == Some(Message::Exit) {
                return Ok(());
            }
        }

        let due = timers.take_due(Instant::now());
        if !due.is_empty() {
            let now = LocalClock.now();
            for id in due {
                tracing::trace!(timer = id.get(), %now, "timer fired");
                page.on_timer(id, now);
            }
        }
    }
}
