//! Renderer: draws pregame, waiting, game and game-over screens.
//!
//! Painting reads the engine's objects fresh on every call and never writes
//! to them. The only state that changes between frames is the background
//! color, which follows the control's override.

use anyhow::Result;
use arrayvec::ArrayString;
use tracing::{debug, trace};

use crate::assets::AssetTable;
use crate::core::{Body, Control, Engine, GameEvent, GameObject, Missile, Npc, ObjectId, Player, Wall};
use crate::surface::{Font, Surface};
use crate::types::{
    Facing, GamePhase, Rect, Rgb, BACKGROUND_COLOR, ENEMY_IMAGES, FONT_SIZE, HEALTH_BAR_FILL,
    HEALTH_BAR_SLOTS, HEALTH_TEXT_COLOR, HEALTH_TEXT_OFFSET_X, HEALTH_TEXT_OFFSET_Y,
    LEVEL_UP_TEXT, MISSILE_COLOR, MISSILE_DISPLAY_SIZE, MISSILE_IMAGE, NPC_COLOR, NPC_IMAGES,
    OPPONENT_COLOR, PLAYER_COLOR, STATUS_BAR_HEIGHT, STATUS_TEXT_X, TEXT_COLOR, TITLE_PAGE_IMAGE,
    WALL_COLOR,
};

/// `|` + slots + `|`, each slot at most a 3-byte glyph.
pub type HealthBar = ArrayString<{ HEALTH_BAR_SLOTS * 3 + 2 }>;

const PREGAME_LINE_1: &str = "Press 'm' for multi player, 's' for single player,";
const PREGAME_LINE_2: &str = "'t' for tournament, 'esc' to quit.";
const LOADING_TEXT: &str = "Loading game...";

/// Named display colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub player: Rgb,
    pub opponent: Rgb,
    pub missile: Rgb,
    pub npc: Rgb,
    pub wall: Rgb,
    pub text: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            player: PLAYER_COLOR,
            opponent: OPPONENT_COLOR,
            missile: MISSILE_COLOR,
            npc: NPC_COLOR,
            wall: WALL_COLOR,
            text: TEXT_COLOR,
        }
    }
}

/// Maps world units onto surface cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Columns per world unit.
    pub cols_per_unit: f64,
    /// Rows per world unit.
    pub rows_per_unit: f64,
}

impl Default for Projection {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cols_per_unit: 2.0,
            rows_per_unit: 1.0,
        }
    }
}

impl Projection {
    pub fn point(&self, x: f64, y: f64) -> (i32, i32) {
        (
            (x * self.cols_per_unit).round() as i32,
            (y * self.rows_per_unit).round() as i32,
        )
    }

    /// Cell rectangle covering a world-space box, at least one cell large.
    pub fn rect(&self, x: f64, y: f64, w: f64, h: f64) -> Rect {
        let (px, py) = self.point(x, y);
        let pw = ((w * self.cols_per_unit).round() as i32).max(1);
        let ph = ((h * self.rows_per_unit).round() as i32).max(1);
        Rect::new(px, py, pw, ph)
    }

    pub fn body_rect(&self, body: &Body) -> Rect {
        self.rect(body.x, body.y, body.w, body.h)
    }
}

/// Number of filled health slots, `round(health / max_health * 10)` clamped
/// to the gauge. A non-positive `max_health` reads as empty.
pub fn filled_slots(health: f64, max_health: f64) -> usize {
    if max_health <= 0.0 || max_health.is_nan() {
        return 0;
    }
    let pct = (health / max_health * HEALTH_BAR_SLOTS as f64).round();
    if pct.is_nan() || pct <= 0.0 {
        return 0;
    }
    (pct as usize).min(HEALTH_BAR_SLOTS)
}

/// Bracketed text gauge, e.g. `|███████   |`.
pub fn health_bar(health: f64, max_health: f64) -> HealthBar {
    let filled = filled_slots(health, max_health);
    let mut bar = HealthBar::new();
    bar.push('|');
    for slot in 0..HEALTH_BAR_SLOTS {
        bar.push(if slot < filled { HEALTH_BAR_FILL } else { ' ' });
    }
    bar.push('|');
    bar
}

/// Draws every screen of the game onto a [`Surface`].
pub struct Renderer {
    width: u16,
    height: u16,
    font: Font,
    font_size: u16,
    palette: Palette,
    background: Rgb,
    projection: Projection,
    assets: AssetTable,
}

impl Renderer {
    pub fn new(width: u16, height: u16, assets: AssetTable) -> Self {
        Self {
            width,
            height,
            font: Font::monospace(FONT_SIZE),
            font_size: FONT_SIZE,
            palette: Palette::default(),
            background: BACKGROUND_COLOR,
            projection: Projection::default(),
            assets,
        }
    }

    /// Track a new target size (e.g. after a terminal resize).
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    pub fn background(&self) -> Rgb {
        self.background
    }

    pub fn assets(&self) -> &AssetTable {
        &self.assets
    }

    /// World-to-cell rectangle of an object.
    pub fn obj_to_rect(&self, obj: &GameObject) -> Rect {
        self.projection.body_rect(obj.body())
    }

    fn screen_rect(&self) -> Rect {
        Rect::new(0, 0, self.width as i32, self.height as i32)
    }

    fn center(&self) -> (i32, i32) {
        (self.width as i32 / 2, self.height as i32 / 2)
    }

    /// Paint whichever screen belongs to `phase`.
    pub fn paint(
        &mut self,
        phase: GamePhase,
        surface: &mut dyn Surface,
        engine: &dyn Engine,
        control: &Control,
    ) -> Result<()> {
        match phase {
            GamePhase::Pregame => self.paint_pregame(surface, control),
            GamePhase::WaitingForGame => self.paint_waiting_for_game(surface, engine, control),
            GamePhase::Playing => self.paint_game(surface, engine, control),
            GamePhase::GameOver => self.paint_game_over(surface, engine, control),
        }
    }

    /// Screen shown before the user picks a game type.
    pub fn paint_pregame(&self, surface: &mut dyn Surface, _control: &Control) -> Result<()> {
        let screen = self.screen_rect();
        surface.fill(self.background, screen);

        let (cx, cy) = self.center();
        let fs = self.font_size as i32;
        surface.draw_text_center(PREGAME_LINE_1, self.palette.text, cx, cy, &self.font);
        surface.draw_text_center(PREGAME_LINE_2, self.palette.text, cx, cy + 3 * fs / 2, &self.font);

        let title = self.assets.get(TITLE_PAGE_IMAGE)?;
        surface.blit(title, screen);
        Ok(())
    }

    /// Screen shown after a game type is chosen and before the game starts.
    pub fn paint_waiting_for_game(
        &self,
        surface: &mut dyn Surface,
        _engine: &dyn Engine,
        _control: &Control,
    ) -> Result<()> {
        surface.fill(self.background, self.screen_rect());
        let (cx, cy) = self.center();
        surface.draw_text_center(LOADING_TEXT, self.palette.text, cx, cy, &self.font);
        Ok(())
    }

    /// Screen shown while a game is running.
    pub fn paint_game(
        &mut self,
        surface: &mut dyn Surface,
        engine: &dyn Engine,
        control: &Control,
    ) -> Result<()> {
        if let Some(color) = control.background_color {
            if color != self.background {
                debug!(?color, "background override adopted");
                self.background = color;
            }
        }
        surface.fill(self.background, self.screen_rect());

        for obj in engine.objects().values() {
            match obj {
                GameObject::Wall(wall) => self.paint_wall(surface, wall),
                GameObject::Npc(npc) => self.paint_npc(surface, npc)?,
                GameObject::Missile(missile) => self.paint_missile(surface, missile)?,
                GameObject::Player(player) => self.paint_player(surface, engine, control, player)?,
            }
        }

        if control.show_info {
            self.paint_game_status(surface, engine, control);
        }
        Ok(())
    }

    /// The last game frame with a winner banner on top.
    pub fn paint_game_over(
        &mut self,
        surface: &mut dyn Surface,
        engine: &dyn Engine,
        control: &Control,
    ) -> Result<()> {
        self.paint_game(surface, engine, control)?;

        let winner = engine.winner_name().unwrap_or("nobody");
        let text = format!("Game Over ({winner} wins!)");
        let (cx, cy) = self.center();
        surface.draw_text_center(&text, self.palette.text, cx, cy, &self.font);
        Ok(())
    }

    /// Hook for occurrences outside the object model. Nothing is drawn yet.
    pub fn process_event(
        &self,
        _surface: &mut dyn Surface,
        _engine: &dyn Engine,
        _control: &Control,
        event: &GameEvent,
    ) {
        trace!(?event, "game event");
    }

    fn paint_wall(&self, surface: &mut dyn Surface, wall: &Wall) {
        surface.draw_rect(self.palette.wall, self.projection.body_rect(&wall.body));
    }

    fn paint_npc(&self, surface: &mut dyn Surface, npc: &Npc) -> Result<()> {
        if npc.alive {
            let facing = Facing::from_velocity(npc.body.dx, npc.body.dy);
            let sprite = self.assets.get(NPC_IMAGES[facing.index()])?;
            surface.blit(sprite, self.projection.body_rect(&npc.body));
        }
        let bar = health_bar(npc.health, npc.max_health);
        let text = if npc.alive { bar.as_str() } else { LEVEL_UP_TEXT };
        self.paint_health_text(surface, &npc.body, text);
        Ok(())
    }

    fn paint_missile(&self, surface: &mut dyn Surface, missile: &Missile) -> Result<()> {
        if !missile.alive {
            return Ok(());
        }
        // Display size only; the engine's hitbox is left alone.
        let rect = self.projection.rect(
            missile.body.x,
            missile.body.y,
            MISSILE_DISPLAY_SIZE,
            MISSILE_DISPLAY_SIZE,
        );
        surface.blit(self.assets.get(MISSILE_IMAGE)?, rect);
        Ok(())
    }

    fn paint_player(
        &self,
        surface: &mut dyn Surface,
        engine: &dyn Engine,
        control: &Control,
        player: &Player,
    ) -> Result<()> {
        let bar = health_bar(player.health, player.max_health);
        let text = if player.alive { bar.as_str() } else { LEVEL_UP_TEXT };
        self.paint_health_text(surface, &player.body, text);
        if !player.alive {
            return Ok(());
        }

        let name = if player.oid == engine.player_oid() {
            control.player_image.as_str()
        } else {
            ENEMY_IMAGES[Facing::from_velocity(player.body.dx, player.body.dy).index()]
        };
        surface.blit(self.assets.get(name)?, self.projection.body_rect(&player.body));
        Ok(())
    }

    fn paint_health_text(&self, surface: &mut dyn Surface, body: &Body, text: &str) {
        let (cx, cy) = self
            .projection
            .point(body.x + HEALTH_TEXT_OFFSET_X, body.y + HEALTH_TEXT_OFFSET_Y);
        surface.draw_text_center(text, HEALTH_TEXT_COLOR, cx, cy, &self.font);
    }

    /// Stat lines for both players in the bottom strip.
    pub fn paint_game_status(
        &self,
        surface: &mut dyn Surface,
        engine: &dyn Engine,
        _control: &Control,
    ) {
        let top = self.height as i32 - STATUS_BAR_HEIGHT;
        let fs = self.font_size as i32;

        if let Some(me) = status_player(engine, engine.player_oid()) {
            let line = status_line("Me", engine.name(), me);
            let y = top + 2 * fs;
            surface.draw_text_left(&line, self.palette.text, STATUS_TEXT_X, y, &self.font);
        }

        if let Some(opponent) = status_player(engine, engine.opponent_oid()) {
            let line = status_line("Opponent", engine.opponent_name(), opponent);
            let y = top + 4 * fs;
            surface.draw_text_left(&line, self.palette.text, STATUS_TEXT_X, y, &self.font);
        }
    }
}

fn status_player(engine: &dyn Engine, oid: ObjectId) -> Option<&Player> {
    if oid <= 0 {
        return None;
    }
    match engine.object(oid)? {
        GameObject::Player(player) => Some(player),
        other => {
            debug!(oid, kind = other.kind(), "status id does not name a player");
            None
        }
    }
}

fn status_line(label: &str, name: &str, p: &Player) -> String {
    format!(
        "{label}: {name}  HP: {:.1}  XP: {:.1} Moving: {:.1} Missiles: {:.1}",
        p.health, p.experience, p.move_mana, p.missile_mana
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::Sprite;
    use crate::core::{Roster, Snapshot};
    use crate::fb::FrameBuffer;

    fn assets() -> AssetTable {
        let mut table = AssetTable::new();
        for (i, name) in crate::types::REQUIRED_IMAGES
            .iter()
            .chain(["player.png"].iter())
            .enumerate()
        {
            table.insert(*name, Sprite::solid(2, 2, Rgb::new(i as u8 * 10, 1, 2)));
        }
        table
    }

    #[test]
    fn health_bar_shapes() {
        assert_eq!(health_bar(10.0, 10.0).as_str(), "|██████████|");
        assert_eq!(health_bar(0.0, 10.0).as_str(), "|          |");
        assert_eq!(health_bar(7.4, 10.0).as_str(), "|███████   |");
        assert_eq!(health_bar(7.5, 10.0).as_str(), "|████████  |");
    }

    #[test]
    fn health_bar_clamps_out_of_range_ratios() {
        assert_eq!(filled_slots(25.0, 10.0), 10);
        assert_eq!(filled_slots(-3.0, 10.0), 0);
        assert_eq!(filled_slots(5.0, 0.0), 0);
        assert_eq!(filled_slots(f64::NAN, 10.0), 0);
        assert_eq!(health_bar(5.0, 0.0).chars().count(), 12);
    }

    #[test]
    fn projection_rounds_and_keeps_one_cell() {
        let p = Projection::default();
        assert_eq!(p.rect(1.2, 3.6, 0.1, 0.1), Rect::new(2, 4, 1, 1));
        assert_eq!(p.rect(2.0, 2.0, 4.0, 4.0), Rect::new(4, 2, 8, 4));
    }

    #[test]
    fn waiting_screen_centers_loading_text() {
        let renderer = Renderer::new(40, 10, assets());
        let mut fb = FrameBuffer::new(40, 10);
        let snap = Snapshot::new(Roster::default());
        renderer
            .paint_waiting_for_game(&mut fb, &snap, &Control::default())
            .unwrap();

        // 15 chars centered on column 20 start at 13.
        assert!(fb.row_text(5).starts_with("             Loading game..."));
        assert_eq!(fb.get(0, 0).unwrap().style.bg, BACKGROUND_COLOR);
    }

    #[test]
    fn missile_rect_uses_display_size() {
        let mut renderer = Renderer::new(40, 20, assets());
        let mut fb = FrameBuffer::new(40, 20);
        let missile = Missile {
            oid: 5,
            body: Body::new(3.0, 3.0, 9.0, 9.0),
            alive: true,
        };
        let snap = Snapshot::new(Roster::default()).with(missile.clone());
        let mut control = Control::default();
        control.show_info = false;
        renderer.paint_game(&mut fb, &snap, &control).unwrap();

        // 1.8 units -> 4 columns x 2 rows at (6, 3).
        let missile_bg = renderer.assets().get(MISSILE_IMAGE).unwrap().pixel(0, 0).unwrap();
        assert_eq!(fb.get(6, 3).unwrap().style.bg, missile_bg);
        assert_eq!(fb.get(9, 4).unwrap().style.bg, missile_bg);
        assert_eq!(fb.get(10, 3).unwrap().style.bg, BACKGROUND_COLOR);
        assert_eq!(fb.get(6, 5).unwrap().style.bg, BACKGROUND_COLOR);
        // The engine's object keeps its own size.
        assert_eq!(snap.object(5).unwrap().body().w, 9.0);
    }
}
