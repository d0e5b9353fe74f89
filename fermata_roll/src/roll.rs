// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use fermata_behavior::{Command, DragOrigin, DragUpdate, EditorHost, Modifiers, TooltipTarget};
use fermata_geometry::{HitList, intersects_rect};
use fermata_view::{FitOptions, ViewportSerializer, ViewportState, ZoomLimits};
use hashbrown::HashMap;
use kurbo::{Point, Rect, Size, Vec2};

use crate::{Note, NoteId, RollError, Selection};

/// Headless piano-roll note model.
///
/// Owns the notes, the selection, the viewport and the transient visuals
/// (selection box, tooltip), and reduces every [`Command`] sent by the
/// behaviors. [`PianoRoll::render`] stands in for a paint pass: it rebuilds
/// the hit list behaviors test against.
#[derive(Clone, Debug)]
pub struct PianoRoll {
    notes: Vec<Note>,
    index: HashMap<NoteId, usize>,
    selection: Selection<NoteId>,
    viewport: ViewportState,
    limits: ZoomLimits,
    screen: Size,
    hits: HitList<NoteId>,
    selection_box: Option<Rect>,
    tooltip: Option<TooltipTarget<NoteId>>,
}

impl PianoRoll {
    /// Creates an empty roll shown on a screen of `screen` size.
    #[must_use]
    pub fn new(screen: Size) -> Self {
        Self {
            notes: Vec::new(),
            index: HashMap::new(),
            selection: Selection::new(),
            viewport: ViewportState::IDENTITY,
            limits: ZoomLimits::default(),
            screen,
            hits: HitList::new(),
            selection_box: None,
            tooltip: None,
        }
    }

    /// Adds a note on top of the existing ones.
    ///
    /// # Errors
    ///
    /// Returns [`RollError::DuplicateNote`] if the id is taken.
    pub fn add_note(&mut self, note: Note) -> Result<(), RollError> {
        if self.index.contains_key(&note.id) {
            return Err(RollError::DuplicateNote(note.id));
        }
        self.index.insert(note.id, self.notes.len());
        self.notes.push(note);
        Ok(())
    }

    /// Removes a note and deselects it.
    pub fn remove_note(&mut self, id: NoteId) -> Option<Note> {
        let at = self.index.remove(&id)?;
        let note = self.notes.remove(at);
        for slot in self.index.values_mut() {
            if *slot > at {
                *slot -= 1;
            }
        }
        self.selection.remove(&id);
        Some(note)
    }

    /// Returns a note by id.
    #[must_use]
    pub fn note(&self, id: NoteId) -> Option<&Note> {
        self.index.get(&id).map(|&i| &self.notes[i])
    }

    /// Returns all notes in draw order.
    #[must_use]
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Returns the selection.
    #[must_use]
    pub fn selection(&self) -> &Selection<NoteId> {
        &self.selection
    }

    /// Returns the current viewport.
    #[must_use]
    pub fn viewport_state(&self) -> ViewportState {
        self.viewport
    }

    /// Replaces the viewport, clamping its zoom into the roll's limits.
    pub fn set_viewport(&mut self, viewport: ViewportState) {
        self.viewport = viewport.with_zoom(viewport.zoom(), &self.limits);
    }

    /// Returns the zoom limits.
    #[must_use]
    pub fn zoom_limits(&self) -> ZoomLimits {
        self.limits
    }

    /// Replaces the zoom limits and re-clamps the viewport.
    pub fn set_zoom_limits(&mut self, limits: ZoomLimits) {
        self.limits = limits;
        self.set_viewport(self.viewport);
    }

    /// Returns the screen size.
    #[must_use]
    pub fn screen_size(&self) -> Size {
        self.screen
    }

    /// Sets the screen size used for culling and fitting.
    pub fn set_screen_size(&mut self, screen: Size) {
        self.screen = screen;
    }

    /// Rubber-band rectangle currently shown, in screen coordinates.
    #[must_use]
    pub fn selection_box(&self) -> Option<Rect> {
        self.selection_box
    }

    /// Tooltip currently shown.
    #[must_use]
    pub fn tooltip(&self) -> Option<&TooltipTarget<NoteId>> {
        self.tooltip.as_ref()
    }

    /// Rebuilds the hit list from the current viewport.
    ///
    /// Notes outside the visible region are skipped. Returns the number of
    /// notes on screen.
    pub fn render(&mut self) -> usize {
        let visible = self.viewport.visible_world_rect(self.screen);
        self.hits.clear();
        for note in &self.notes {
            let rect = note.world_rect();
            if intersects_rect(rect, visible) {
                self.hits.push(self.viewport.rect_to_screen(rect), note.id);
            }
        }
        self.hits.len()
    }

    /// Fits every note into the screen. Returns `false` if there is nothing
    /// to fit.
    pub fn fit_to_notes(&mut self, options: &FitOptions) -> bool {
        let Some(bounds) = self
            .notes
            .iter()
            .map(Note::world_rect)
            .reduce(|a, b| a.union(b))
        else {
            return false;
        };
        let options = options.with_limits(self.limits);
        match ViewportState::fit(bounds, self.screen, &options) {
            Some(viewport) => {
                self.viewport = viewport;
                true
            }
            None => false,
        }
    }

    /// Stores the viewport through `serializer`.
    pub fn save_viewport<Z: ViewportSerializer>(&self, serializer: &Z) -> Z::Primitive {
        serializer.serialize(&self.viewport)
    }

    /// Restores a stored viewport. Unusable values leave the viewport as is
    /// and return `false`.
    pub fn restore_viewport<Z: ViewportSerializer>(
        &mut self,
        serializer: &Z,
        stored: &Z::Primitive,
    ) -> bool {
        match serializer.deserialize(stored) {
            Some(viewport) => {
                self.set_viewport(viewport);
                true
            }
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!("discarding stored viewport");
                false
            }
        }
    }

    fn select_rect(&mut self, keys: Vec<NoteId>, modifiers: Modifiers) {
        if modifiers.contains(Modifiers::SHIFT) {
            self.selection.extend_with(keys);
        } else if modifiers.intersects(Modifiers::CONTROL | Modifiers::META) {
            for key in keys {
                self.selection.toggle(key);
            }
        } else {
            self.selection.replace_with(keys);
        }
    }

    fn move_dragged(&mut self, update: &DragUpdate<NoteId>) {
        for origin in update.origins.iter() {
            self.place(origin, update.world_delta.x, update.world_delta.y);
        }
    }

    fn place(&mut self, origin: &DragOrigin<NoteId>, dx: f64, dy: f64) {
        if let Some(&i) = self.index.get(&origin.key) {
            self.notes[i].set_position(origin.position + Vec2::new(dx, dy));
        }
    }
}

impl EditorHost for PianoRoll {
    type Key = NoteId;

    fn viewport(&self) -> ViewportState {
        self.viewport
    }

    fn hits(&self) -> &HitList<NoteId> {
        &self.hits
    }

    fn is_selected(&self, key: &NoteId) -> bool {
        self.selection.contains(key)
    }

    fn selected(&self) -> Vec<NoteId> {
        self.selection.keys().to_vec()
    }

    fn world_position(&self, key: &NoteId) -> Option<Point> {
        self.note(*key).map(Note::position)
    }

    fn apply(&mut self, command: Command<NoteId>) {
        match command {
            Command::SetViewport(viewport) => self.set_viewport(viewport),
            Command::SetSelection(keys) => {
                let keys = keys.into_iter().filter(|k| self.index.contains_key(k));
                self.selection.replace_with(keys.collect::<Vec<_>>());
            }
            Command::SelectRect { keys, modifiers } => self.select_rect(keys, modifiers),
            Command::DragMove(update) => self.move_dragged(&update),
            Command::DragEnd(update) => {
                self.move_dragged(&update);
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    notes = update.origins.len(),
                    dx = update.world_delta.x,
                    dy = update.world_delta.y,
                    "drag committed"
                );
            }
            Command::DragCancel { origins } => {
                for origin in origins.iter() {
                    self.place(origin, 0.0, 0.0);
                }
            }
            Command::SelectionBox(rect) => self.selection_box = rect,
            Command::Tooltip(target) => self.tooltip = target,
        }
    }
}
