//! Scene rendering for the scrolling world.
//!
//! The simulation works in 800x600 world units; this module scales that
//! viewport onto whatever terminal area is available and paints it cell by
//! cell. Paint order follows the canvas convention (later paints overwrite):
//! bird, pipes, ground, then the score / prompt overlays.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::constants::{GROUND_TILE_W, VIEWPORT_H, VIEWPORT_W};
use crate::game::types::World;

/// What occupies one terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Sky,
    Bird,
    Pipe,
    GroundLight,
    GroundDark,
}

/// Render the whole game scene.
pub fn render_game(frame: &mut Frame, area: Rect, world: &World, best: u32) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Soar ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width < 4 || inner.height < 4 {
        return;
    }

    render_play_area(frame, inner, world);

    if world.paused {
        render_start_prompt(frame, inner, best);
    } else {
        render_score(frame, inner, world.score);
    }
}

fn render_play_area(frame: &mut Frame, area: Rect, world: &World) {
    let w = area.width as usize;
    let h = area.height as usize;
    let sx = w as f64 / VIEWPORT_W;
    let sy = h as f64 / VIEWPORT_H;

    let mut cells = vec![Cell::Sky; w * h];

    paint_bird(&mut cells, w, h, sx, sy, world);
    paint_pipes(&mut cells, w, h, sx, sy, world);
    paint_ground(&mut cells, w, h, sx, sy, world);

    let mut lines = Vec::with_capacity(h);
    for row in 0..h {
        let mut spans = Vec::with_capacity(w);
        for col in 0..w {
            spans.push(cell_span(cells[row * w + col]));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn cell_span(cell: Cell) -> Span<'static> {
    match cell {
        Cell::Sky => Span::raw(" "),
        Cell::Bird => Span::styled(
            "●",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Cell::Pipe => Span::styled("█", Style::default().fg(Color::Green)),
        Cell::GroundLight => Span::styled("▓", Style::default().fg(Color::Yellow)),
        Cell::GroundDark => Span::styled("▓", Style::default().fg(Color::LightYellow)),
    }
}

/// Filled circle at the bird's camera-relative position. Terminal cells are
/// not square, so the radius scales per axis.
fn paint_bird(cells: &mut [Cell], w: usize, h: usize, sx: f64, sy: f64, world: &World) {
    let bx = (world.bird.x - world.camera.x) * sx;
    let by = world.bird.y * sy;
    let rx = (world.bird.radius * sx).max(1.0);
    let ry = (world.bird.radius * sy).max(0.5);

    let col0 = (bx - rx).floor().max(0.0) as usize;
    let col1 = ((bx + rx).ceil().min(w as f64)).max(0.0) as usize;
    let row0 = (by - ry).floor().max(0.0) as usize;
    let row1 = ((by + ry).ceil().min(h as f64)).max(0.0) as usize;

    for row in row0..row1 {
        for col in col0..col1 {
            let nx = (col as f64 + 0.5 - bx) / rx;
            let ny = (row as f64 + 0.5 - by) / ry;
            if nx * nx + ny * ny <= 1.0 {
                cells[row * w + col] = Cell::Bird;
            }
        }
    }
}

/// Filled rectangles, camera-relative x. Off-screen pipes clip to nothing.
fn paint_pipes(cells: &mut [Cell], w: usize, h: usize, sx: f64, sy: f64, world: &World) {
    for pipe in &world.pipes {
        let view_x = pipe.x - world.camera.x;
        let col0 = (view_x * sx).round().max(0.0) as usize;
        let col1 = (((view_x + pipe.w) * sx).round().min(w as f64)).max(0.0) as usize;
        let row0 = (pipe.y * sy).round().max(0.0) as usize;
        let row1 = (((pipe.y + pipe.h) * sy).round().min(h as f64)).max(0.0) as usize;

        for row in row0..row1 {
            for col in col0..col1 {
                cells[row * w + col] = Cell::Pipe;
            }
        }
    }
}

/// Screen-fixed tile pattern repeated across the viewport width, drawn after
/// the pipes so it covers their feet.
fn paint_ground(cells: &mut [Cell], w: usize, h: usize, sx: f64, sy: f64, world: &World) {
    let row0 = (world.ground.y * sy).round().max(0.0) as usize;
    let tile_w = ((GROUND_TILE_W * sx).round() as usize).max(1);

    for row in row0..h {
        for col in 0..w {
            cells[row * w + col] = if (col / tile_w) % 2 == 0 {
                Cell::GroundLight
            } else {
                Cell::GroundDark
            };
        }
    }
}

/// Centered score near the top, only while unpaused.
fn render_score(frame: &mut Frame, area: Rect, score: u32) {
    let row = area.y + ((50.0 / VIEWPORT_H) * area.height as f64) as u16;
    let rect = Rect::new(area.x, row.min(area.y + area.height - 1), area.width, 1);

    let text = Paragraph::new(Span::styled(
        score.to_string(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);

    frame.render_widget(text, rect);
}

/// The "press any key" button, only while paused. Shows the session best
/// under the prompt once there is one.
fn render_start_prompt(frame: &mut Frame, area: Rect, best: u32) {
    let bw = 22.min(area.width);
    let bh = 3.min(area.height);
    let rect = Rect::new(
        area.x + (area.width - bw) / 2,
        area.y + (area.height - bh) / 2,
        bw,
        bh,
    );

    let style = Style::default().bg(Color::Rgb(255, 165, 0)).fg(Color::White);
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "PRESS ANY KEY",
            style.add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines)
            .style(style)
            .alignment(Alignment::Center),
        rect,
    );

    if best > 0 && rect.y + bh < area.y + area.height {
        let best_rect = Rect::new(area.x, rect.y + bh, area.width, 1);
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!("best {}", best),
                Style::default().fg(Color::DarkGray),
            ))
            .alignment(Alignment::Center),
            best_rect,
        );
    }
}
