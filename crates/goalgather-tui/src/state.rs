//! Application state composition.
//!
//! ```text
//! AppState
//! ├── tui: TuiState
//! │   ├── session: Session      (welcome, login, sign up or the main shell)
//! │   ├── task_seq: TaskSeq     (async task id generator)
//! │   ├── tasks: Tasks          (task lifecycle state)
//! │   └── images: ImageCache    (per-session image lookups)
//! └── overlay: Option<Overlay>  (settings sheets)
//! ```
//!
//! State is split between `TuiState` and `Option<Overlay>` so overlay
//! handlers can borrow the overlay mutably while the reducer still owns
//! the rest of the state.

use goalgather_core::config::Config;
use goalgather_core::fixtures::Fixtures;

use crate::common::{ImageCache, TaskKind, TaskSeq, Tasks};
use crate::features::auth::{LoginState, SignUpState, WelcomeState};
use crate::features::shell::MainShell;
use crate::overlays::Overlay;

pub struct AppState {
    pub tui: TuiState,
    pub overlay: Option<Overlay>,
}

impl AppState {
    pub fn new(config: Config, fixtures: Fixtures) -> Self {
        Self {
            tui: TuiState::new(config, fixtures),
            overlay: None,
        }
    }
}

/// Which top-level screen is showing.
#[derive(Debug)]
pub enum Session {
    Welcome(WelcomeState),
    Login(LoginState),
    SignUp(SignUpState),
    Main(MainShell),
}

impl Session {
    /// True while this session is waiting on a sign-in task of `kind`.
    pub fn awaits(&self, kind: TaskKind) -> bool {
        match (self, kind) {
            (Session::Login(state), TaskKind::Login) => state.submitting,
            (Session::SignUp(state), TaskKind::SignUp) => state.submitting,
            _ => false,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Session::Welcome(_) => "welcome",
            Session::Login(_) => "login",
            Session::SignUp(_) => "sign-up",
            Session::Main(_) => "main",
        }
    }
}

pub struct TuiState {
    pub should_quit: bool,
    pub config: Config,
    pub fixtures: Fixtures,
    pub session: Session,
    pub task_seq: TaskSeq,
    pub tasks: Tasks,
    pub spinner_frame: usize,
    /// Last known terminal size (width, height).
    pub viewport: (u16, u16),
    pub images: ImageCache,
}

impl TuiState {
    pub fn new(config: Config, fixtures: Fixtures) -> Self {
        let session = if config.skip_welcome {
            Session::Main(MainShell::new(&fixtures, &config))
        } else {
            Session::Welcome(WelcomeState::default())
        };
        Self {
            should_quit: false,
            config,
            fixtures,
            session,
            task_seq: TaskSeq::default(),
            tasks: Tasks::default(),
            spinner_frame: 0,
            viewport: (0, 0),
            images: ImageCache::default(),
        }
    }

    pub fn shell_mut(&mut self) -> Option<&mut MainShell> {
        match &mut self.session {
            Session::Main(shell) => Some(shell),
            _ => None,
        }
    }
}
