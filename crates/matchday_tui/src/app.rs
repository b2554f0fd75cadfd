//! Application state: an explicit phase progression replacing a
//! callback-driven flow. The match always moves forward through the
//! phases below; replay loops back to a fresh match instead of
//! re-entering the play routine.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use matchday_core::{
    draw_teams, load_roster, outcome_url, Bet, BetOutcome, Config, MatchEngine, MatchPlan, Result,
    ResultStore, Team, TeamSide,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Welcome screen, waiting for kick-off.
    Idle,
    /// Home line-up shown; the away list follows after one delay tick.
    RevealHome,
    /// Both line-ups shown; the bet prompt follows after one delay tick.
    RevealAway,
    /// "Place a bet?" y/n.
    BetPrompt,
    /// Pick a side to back.
    BetPick,
    /// One engine round per delay tick.
    Simulating,
    /// Final whistle: report, persist, settle the bet.
    Reporting,
    /// "Another round?" y/n.
    AwaitingReplay,
    /// Farewell shown; only quit remains.
    Done,
}

pub struct App {
    config: Config,
    base_seed: Option<u64>,
    matches_played: u64,
    phase: Phase,
    log: Vec<String>,
    scroll_from_bottom: usize,
    plan: Option<MatchPlan>,
    engine: Option<MatchEngine>,
    bet: Option<Bet>,
    should_quit: bool,
}

fn lineup_lines(side: TeamSide, team: &Team) -> Vec<String> {
    let mut lines = vec![String::new(), format!("{} line-up:", side)];
    for player in &team.players {
        lines.push(format!("  {} ({})", player.name, player.position_summary()));
    }
    lines
}

impl App {
    pub fn new(config: Config, base_seed: Option<u64>) -> Self {
        let mut app = Self {
            config,
            base_seed,
            matches_played: 0,
            phase: Phase::Idle,
            log: Vec::new(),
            scroll_from_bottom: 0,
            plan: None,
            engine: None,
            bet: None,
            should_quit: false,
        };
        app.push("Welcome to Matchday, the football match simulator!");
        app.push("Press Enter to kick off.");
        app
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn log(&self) -> &[String] {
        &self.log
    }

    pub fn scroll_from_bottom(&self) -> usize {
        self.scroll_from_bottom
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The per-round delay doubles as the UI tick rate.
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.config.round_delay_ms)
    }

    fn push(&mut self, line: impl Into<String>) {
        self.log.push(line.into());
    }

    fn scroll_up(&mut self, lines: usize) {
        self.scroll_from_bottom = (self.scroll_from_bottom + lines).min(self.log.len());
    }

    fn scroll_down(&mut self, lines: usize) {
        self.scroll_from_bottom = self.scroll_from_bottom.saturating_sub(lines);
    }

    fn next_seed(&mut self) -> u64 {
        let seed = match self.base_seed {
            Some(base) => base.wrapping_add(self.matches_played),
            None => rand::thread_rng().gen(),
        };
        self.matches_played += 1;
        seed
    }

    pub fn on_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        // Global keys work in every phase.
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return Ok(());
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return Ok(());
            }
            KeyCode::Up => {
                self.scroll_up(1);
                return Ok(());
            }
            KeyCode::Down => {
                self.scroll_down(1);
                return Ok(());
            }
            KeyCode::PageUp => {
                self.scroll_up(10);
                return Ok(());
            }
            KeyCode::PageDown => {
                self.scroll_down(10);
                return Ok(());
            }
            _ => {}
        }

        match self.phase {
            Phase::Idle => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    self.start_match()?;
                }
            }
            Phase::BetPrompt => match key.code {
                KeyCode::Char('y') => {
                    self.phase = Phase::BetPick;
                    self.push("Which side takes it? (1: Home, 2: Away)");
                }
                KeyCode::Char('n') => {
                    self.push("No bet placed.");
                    self.kick_off();
                }
                _ => {}
            },
            Phase::BetPick => {
                let side = match key.code {
                    KeyCode::Char('1') => Some(TeamSide::Home),
                    KeyCode::Char('2') => Some(TeamSide::Away),
                    _ => None,
                };
                if let Some(side) = side {
                    self.place_bet(side);
                    self.kick_off();
                }
            }
            Phase::AwaitingReplay => match key.code {
                KeyCode::Char('y') | KeyCode::Enter => self.start_match()?,
                KeyCode::Char('n') => {
                    self.push("");
                    self.push("Thanks for playing. See you next time!");
                    self.phase = Phase::Done;
                }
                _ => {}
            },
            _ => {}
        }
        Ok(())
    }

    pub fn on_tick(&mut self) -> Result<()> {
        match self.phase {
            Phase::RevealHome => {
                if let Some(lines) =
                    self.plan.as_ref().map(|p| lineup_lines(TeamSide::Away, &p.away))
                {
                    self.log.extend(lines);
                }
                self.phase = Phase::RevealAway;
            }
            Phase::RevealAway => {
                self.push("");
                self.push("Place a bet on the match? (y/n)");
                self.phase = Phase::BetPrompt;
            }
            Phase::Simulating => {
                match self.engine.as_mut().and_then(|engine| engine.tick()) {
                    Some(update) => {
                        self.push(format!("Score: {} - {}", update.home_score, update.away_score));
                    }
                    None => self.phase = Phase::Reporting,
                }
            }
            Phase::Reporting => self.finish_match()?,
            _ => {}
        }
        Ok(())
    }

    /// Deal a fresh match: clear the log, load the roster, draw sides.
    fn start_match(&mut self) -> Result<()> {
        self.log.clear();
        self.scroll_from_bottom = 0;
        self.bet = None;
        self.engine = None;

        let seed = self.next_seed();
        tracing::info!(seed, "starting match");

        self.push("Welcome to Matchday, the football match simulator!");

        let players = load_roster(Path::new(&self.config.roster_path))?;
        let mut rng = StdRng::seed_from_u64(seed);
        let (home, away) = draw_teams(players, self.config.team_size, &mut rng)?;

        self.log.extend(lineup_lines(TeamSide::Home, &home));
        self.plan = Some(MatchPlan { home, away, seed });
        self.phase = Phase::RevealHome;
        Ok(())
    }

    fn place_bet(&mut self, side: TeamSide) {
        let captain = self
            .plan
            .as_ref()
            .and_then(|plan| {
                let team = match side {
                    TeamSide::Home => &plan.home,
                    TeamSide::Away => &plan.away,
                };
                team.players.first().map(|p| p.name.clone())
            })
            .unwrap_or_default();

        self.bet = Some(Bet::new(side));
        if captain.is_empty() {
            self.push(format!("You bet on {}.", side));
        } else {
            self.push(format!("You bet on {} (led by {}).", side, captain));
        }
    }

    fn kick_off(&mut self) {
        if let Some(plan) = self.plan.take() {
            self.engine = Some(MatchEngine::new(plan));
            self.push("");
            self.push("Kick-off!");
            self.push("Score: 0 - 0");
            self.phase = Phase::Simulating;
        }
    }

    /// Final whistle: log the result, persist it, settle any bet.
    fn finish_match(&mut self) -> Result<()> {
        let Some(engine) = self.engine.as_mut() else {
            self.phase = Phase::AwaitingReplay;
            return Ok(());
        };
        let result = engine.simulate();
        self.engine = None;

        self.push("");
        self.push(format!("Full time: Home {} - {} Away", result.home_score, result.away_score));

        ResultStore::open(Path::new(&self.config.database_path))?.append(&result)?;

        if let Some(bet) = self.bet.take() {
            let outcome = bet.settle(result.home_score, result.away_score);
            match outcome {
                BetOutcome::Won => self.push("Congratulations, your bet came in!"),
                BetOutcome::Lost => self.push("Unlucky, your bet went down."),
            }
            let url = outcome_url(outcome);
            if let Err(err) = webbrowser::open(url) {
                tracing::warn!(%err, url, "failed to open browser");
            }
        }

        self.push("");
        self.push("Another round? (y/n)");
        self.phase = Phase::AwaitingReplay;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn test_config(dir: &Path) -> Config {
        let csv_path = dir.join("players.csv");
        let mut file = std::fs::File::create(&csv_path).unwrap();
        writeln!(
            file,
            "name,full_name,birth_date,age,height_cm,weight_kgs,positions,nationality,overall_rating,potential,value_euro,wage_euro"
        )
        .unwrap();
        for i in 0..24 {
            writeln!(
                file,
                "Player {i},Player Number {i},1995-01-01,24,180.0,75.0,CM,Utopia,{},75,0.0,0.0",
                60 + i
            )
            .unwrap();
        }

        Config {
            roster_path: csv_path.display().to_string(),
            database_path: dir.join("results.db").display().to_string(),
            team_size: 10,
            round_delay_ms: 0,
        }
    }

    #[test]
    fn test_full_session_without_bet() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        let db_path = config.database_path.clone();
        let mut app = App::new(config, Some(7));

        app.on_key(key(KeyCode::Enter)).unwrap();
        assert_eq!(app.phase(), Phase::RevealHome);

        app.on_tick().unwrap();
        assert_eq!(app.phase(), Phase::RevealAway);
        app.on_tick().unwrap();
        assert_eq!(app.phase(), Phase::BetPrompt);

        app.on_key(key(KeyCode::Char('n'))).unwrap();
        assert_eq!(app.phase(), Phase::Simulating);

        // Nine round ticks, one closing tick, one reporting tick.
        for _ in 0..9 {
            app.on_tick().unwrap();
            assert_eq!(app.phase(), Phase::Simulating);
        }
        app.on_tick().unwrap();
        assert_eq!(app.phase(), Phase::Reporting);
        app.on_tick().unwrap();
        assert_eq!(app.phase(), Phase::AwaitingReplay);

        assert!(app.log().iter().any(|l| l.starts_with("Full time:")));
        assert!(Path::new(&db_path).exists());

        // Explicit stop signal ends the session without re-entry.
        app.on_key(key(KeyCode::Char('n'))).unwrap();
        assert_eq!(app.phase(), Phase::Done);
        assert!(!app.should_quit());
        app.on_key(key(KeyCode::Char('q'))).unwrap();
        assert!(app.should_quit());
    }

    #[test]
    fn test_bet_pick_records_side() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(test_config(dir.path()), Some(7));

        app.on_key(key(KeyCode::Enter)).unwrap();
        app.on_tick().unwrap();
        app.on_tick().unwrap();
        assert_eq!(app.phase(), Phase::BetPrompt);

        app.on_key(key(KeyCode::Char('y'))).unwrap();
        assert_eq!(app.phase(), Phase::BetPick);
        app.on_key(key(KeyCode::Char('1'))).unwrap();

        assert_eq!(app.phase(), Phase::Simulating);
        assert_eq!(app.bet, Some(Bet::new(TeamSide::Home)));
        assert!(app.log().iter().any(|l| l.starts_with("You bet on Home")));
    }

    #[test]
    fn test_replay_starts_fresh_match() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(test_config(dir.path()), Some(7));

        app.on_key(key(KeyCode::Enter)).unwrap();
        app.on_tick().unwrap();
        app.on_tick().unwrap();
        app.on_key(key(KeyCode::Char('n'))).unwrap();
        for _ in 0..11 {
            app.on_tick().unwrap();
        }
        assert_eq!(app.phase(), Phase::AwaitingReplay);

        app.on_key(key(KeyCode::Char('y'))).unwrap();
        assert_eq!(app.phase(), Phase::RevealHome);
        assert!(app.log().iter().all(|l| !l.starts_with("Full time:")));
    }

    #[test]
    fn test_scroll_clamps_to_log() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(test_config(dir.path()), None);

        let len = app.log().len();
        app.on_key(key(KeyCode::PageUp)).unwrap();
        assert!(app.scroll_from_bottom() <= len);
        app.on_key(key(KeyCode::PageDown)).unwrap();
        assert_eq!(app.scroll_from_bottom(), 0);
    }
}
