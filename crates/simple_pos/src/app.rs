use egui::{
    Button, Color32, FontId, Id, Order, Painter, Rect, RichText, Sense, TextEdit, Ui, UiBuilder,
    Vec2,
};

use crate::{
    Activation, Activations, Config, Editor, EditorState, FrameLayout, MenuItemStore,
    layout::OverlayLayout, store::ItemId,
};

/// What a frame's clicks did to the editor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum Transition {
    /// The editor overlay was opened.
    Opened,

    /// A menu item was added and the overlay closed.
    Added(ItemId),
}

/// The whole app: a check viewer on the left, the menu on the right,
/// and the floating editor for adding menu items.
pub struct SimplePos {
    config: Config,
    store: MenuItemStore,
    editor: Editor,

    /// Give the text field keyboard focus next time it is shown.
    focus_field: bool,
}

impl Default for SimplePos {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl SimplePos {
    pub fn new(config: Config) -> Self {
        let editor = Editor::new(config.max_label_chars);
        Self {
            config,
            store: MenuItemStore::new(),
            editor,
            focus_field: false,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &MenuItemStore {
        &self.store
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut Editor {
        &mut self.editor
    }

    /// Lay out and paint one frame, then act on what was clicked.
    pub fn show(&mut self, ctx: &egui::Context) {
        let mut activations = Activations::default();

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let layout =
                    FrameLayout::compose(&self.config, ui.max_rect(), &self.editor, &self.store);
                self.main_ui(ui, &layout, &mut activations);
                if let Some(overlay) = &layout.overlay {
                    self.overlay_ui(ui.ctx(), overlay, &mut activations);
                }
            });

        if !activations.is_empty() {
            log::trace!("{} activation(s) this frame", activations.len());
        }

        // Anything that changed needs to be shown.
        if self.handle_activations(&activations).is_some() {
            ctx.request_repaint();
        }
    }

    /// Fold one frame's worth of clicks into at most one editor transition.
    ///
    /// Closed: any number of trigger clicks open the editor once.
    /// Open: any number of confirm clicks commit the draft once.
    /// Item clicks are logged, once per item.
    pub fn handle_activations(&mut self, activations: &Activations) -> Option<Transition> {
        for id in activations.items() {
            if let Some(item) = self.store.find(id) {
                log::info!("Menu item {id} clicked: {:?}", item.label);
            }
        }

        match self.editor.state() {
            EditorState::Closed if activations.contains(Activation::Trigger) => {
                self.editor.open();
                self.focus_field = true;
                log::debug!("Opened the menu item editor");
                Some(Transition::Opened)
            }
            EditorState::Open if activations.contains(Activation::Confirm) => {
                match self.editor.confirm(&mut self.store) {
                    Ok(id) => {
                        let label = self.store.find(id).map_or("", |item| item.label.as_str());
                        log::info!("Added menu item {id}: {label:?}");
                        Some(Transition::Added(id))
                    }
                    Err(err) => {
                        log::warn!("Menu item not added: {err}");
                        None
                    }
                }
            }
            _ => None,
        }
    }

    fn main_ui(&self, ui: &mut Ui, layout: &FrameLayout, activations: &mut Activations) {
        let Self { config, store, .. } = self;
        let theme = &config.theme;

        ui.scope_builder(UiBuilder::new().max_rect(layout.title), |ui| {
            ui.label(RichText::new(&config.title).heading().color(theme.title));
        });

        paint_box(ui.painter(), layout.check_viewer, theme.check_viewer);
        paint_box(ui.painter(), layout.menu, theme.menu_background);

        for item in &layout.items {
            let Some(record) = store.get(item.index) else {
                continue;
            };
            let button = Button::new(RichText::new(&record.label).color(theme.item_text))
                .fill(theme.item_fill);
            let response = ui
                .push_id(item.id.egui_id(), |ui| ui.put(item.rect, button))
                .inner;
            activations.record(response.clicked(), Activation::Item(item.id));
        }

        let trigger = Button::new(RichText::new(&config.trigger_label).color(theme.trigger_text))
            .fill(theme.trigger_fill);
        let response = ui.put(layout.trigger, trigger);
        activations.record(response.clicked(), Activation::Trigger);
    }

    fn overlay_ui(
        &mut self,
        ctx: &egui::Context,
        overlay: &OverlayLayout,
        activations: &mut Activations,
    ) {
        let Self {
            config,
            editor,
            focus_field,
            ..
        } = self;
        let theme = &config.theme;

        egui::Area::new(Id::new("menu_item_editor"))
            .order(Order::Foreground)
            .fixed_pos(overlay.backdrop.min)
            .show(ctx, |ui| {
                // Swallow clicks meant for anything below the overlay.
                let backdrop_response =
                    ui.interact(overlay.backdrop, ui.id().with("backdrop"), Sense::click());
                if backdrop_response.clicked() {
                    log::debug!("Click outside the menu item editor ignored");
                }

                let painter = ui.painter().with_clip_rect(overlay.backdrop);
                paint_box(&painter, overlay.backdrop, theme.backdrop);
                paint_box(&painter, overlay.rect, theme.overlay_fill);
                paint_box(&painter, overlay.field, theme.field_fill);

                if let Some(draft) = editor.draft_mut() {
                    let field = TextEdit::singleline(draft)
                        .char_limit(config.max_label_chars)
                        .hint_text(config.field_hint.as_str())
                        .font(FontId::proportional(config.field_text_size))
                        .text_color(theme.field_text)
                        .background_color(theme.field_fill)
                        .frame(false)
                        .desired_width(overlay.field.width());
                    let response = ui.put(overlay.field, field);
                    if std::mem::take(focus_field) {
                        response.request_focus();
                    }
                }
                editor.clamp_draft();

                let confirm =
                    Button::new(RichText::new(&config.confirm_label).color(theme.confirm_text))
                        .fill(theme.confirm_fill);
                let response = ui
                    .add_enabled_ui(editor.can_confirm(), |ui| ui.put(overlay.confirm, confirm))
                    .inner;
                activations.record(response.clicked(), Activation::Confirm);
            });
    }
}

impl eframe::App for SimplePos {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

/// Fill `rect` with a solid color, returning the size it covers.
pub fn paint_box(painter: &Painter, rect: Rect, color: Color32) -> Vec2 {
    painter.rect_filled(rect, 0.0, color);
    rect.size()
}
