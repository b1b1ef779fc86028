// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The window is a header (category buttons and theme toggle) above a
//! scrollable grid of the visible photos. While the lightbox is open it is
//! stacked over everything inside an opaque layer, so the grid underneath
//! receives neither clicks nor wheel events: that is the page scroll lock.

use super::config::GalleryConfig;
use super::Message;
use crate::domain::photo::{PhotoRecord, ALL_CATEGORIES};
use crate::error::Error;
use crate::gallery::{DisplayState, GalleryController, GalleryEvent};
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::{Handle, Image};
use iced::widget::{
    button, mouse_area, opaque, scrollable, tooltip, Column, Container, Row, Space, Stack,
    Text,
};
use iced::{ContentFit, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub controller: &'a GalleryController,
    pub gallery: &'a GalleryConfig,
    pub theme_mode: ThemeMode,
    pub load_error: Option<&'a Error>,
    pub has_source: bool,
    pub warning: Option<&'a str>,
}

/// Renders the whole window.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut page = Column::new().push(view_header(&ctx));

    if let Some(key) = ctx.warning {
        page = page.push(view_warning(ctx.i18n, key));
    }

    let body: Element<'_, Message> = if let Some(error) = ctx.load_error {
        view_load_error(ctx.i18n, error)
    } else if !ctx.has_source {
        view_notice(ctx.i18n.tr("gallery-no-source"))
    } else if ctx.controller.visible_len() == 0 {
        view_notice(ctx.i18n.tr("gallery-empty"))
    } else {
        view_grid(ctx.controller, ctx.gallery)
    };
    page = page.push(
        Container::new(body)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    let base = Container::new(page.width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill);

    match ctx.controller.current_display() {
        Some(display) => Stack::new()
            .push(base)
            .push(view_lightbox(ctx.i18n, display))
            .into(),
        None => base.into(),
    }
}

// =============================================================================
// Header
// =============================================================================

fn view_header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let active = ctx.controller.active_filter().name();

    let mut categories = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(category_button(
            ctx.i18n.tr("category-all"),
            ALL_CATEGORIES,
            active == ALL_CATEGORIES,
        ));
    for category in ctx.controller.categories() {
        categories = categories.push(category_button(
            category.to_string(),
            category.as_str(),
            active == category.as_str(),
        ));
    }

    let toggle_label = if ctx.theme_mode.is_dark() {
        ctx.i18n.tr("theme-toggle-light")
    } else {
        ctx.i18n.tr("theme-toggle-dark")
    };
    let theme_toggle = button(Text::new(toggle_label).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::unselected)
        .on_press(Message::ToggleTheme);

    let row = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(Text::new(ctx.i18n.tr("gallery-heading")).size(typography::TITLE_MD))
        .push(categories)
        .push(Space::new().width(Length::Fill))
        .push(theme_toggle);

    Container::new(row)
        .width(Length::Fill)
        .padding([spacing::SM, spacing::MD])
        .style(styles::container::header)
        .into()
}

fn category_button<'a>(label: String, name: &str, is_active: bool) -> Element<'a, Message> {
    let style = if is_active {
        styles::button::selected
    } else {
        styles::button::unselected
    };

    button(Text::new(label).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .style(style)
        .on_press(Message::Gallery(GalleryEvent::CategorySelected(
            name.to_string(),
        )))
        .into()
}

fn view_warning<'a>(i18n: &I18n, key: &str) -> Element<'a, Message> {
    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(i18n.tr(key)).size(typography::BODY))
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new("×").size(typography::BODY))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::button::unselected)
                .on_press(Message::DismissWarning),
        );

    Container::new(row)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::MD])
        .style(styles::container::error_banner)
        .into()
}

// =============================================================================
// Grid
// =============================================================================

fn view_grid<'a>(
    controller: &'a GalleryController,
    gallery: &GalleryConfig,
) -> Element<'a, Message> {
    let columns = usize::from(gallery.grid_columns());
    let thumbnail_height = f32::from(gallery.thumbnail_height());
    let captions = gallery.captions_visible();

    let visible: Vec<&PhotoRecord> = controller.visible_records().collect();
    let mut grid = Column::new().spacing(spacing::SM).padding(spacing::MD);

    for chunk in visible.chunks(columns) {
        let mut row = Row::new().spacing(spacing::SM);
        for &record in chunk {
            row = row.push(view_tile(record, thumbnail_height, captions));
        }
        // Pad the last row so tiles keep the same width
        for _ in chunk.len()..columns {
            row = row.push(Space::new().width(Length::Fill));
        }
        grid = grid.push(row);
    }

    scrollable(grid)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_tile<'a>(record: &'a PhotoRecord, height: f32, captions: bool) -> Element<'a, Message> {
    let thumbnail = Image::new(Handle::from_path(record.image()))
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .content_fit(ContentFit::Cover);

    let mut content = Column::new().spacing(spacing::XXS).push(thumbnail);
    if captions {
        content = content.push(Text::new(record.title()).size(typography::CAPTION));
    }

    button(content)
        .width(Length::Fill)
        .padding(spacing::XXS)
        .style(styles::button::tile)
        .on_press(Message::Gallery(GalleryEvent::ItemActivated(
            record.id().clone(),
        )))
        .into()
}

fn view_notice<'a>(message: String) -> Element<'a, Message> {
    Container::new(Text::new(message).size(typography::BODY))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

fn view_load_error<'a>(i18n: &I18n, error: &Error) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(i18n.tr("error-load-gallery-title")).size(typography::TITLE_SM))
        .push(Text::new(i18n.tr(error.i18n_key())).size(typography::BODY))
        .push(Text::new(error.to_string()).size(typography::CAPTION));

    let banner = Container::new(content)
        .padding(spacing::MD)
        .style(styles::container::error_banner);

    Container::new(banner)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

// =============================================================================
// Lightbox
// =============================================================================

fn view_lightbox<'a>(i18n: &I18n, display: DisplayState<'a>) -> Element<'a, Message> {
    let record = display.record;

    let position = i18n.tr_with_args(
        "lightbox-position",
        &[
            ("index", &(display.index + 1).to_string()),
            ("total", &display.total.to_string()),
        ],
    );
    let top_bar = Row::new()
        .align_y(Vertical::Center)
        .push(
            Container::new(Text::new(position).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::container::position_counter),
        )
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(i18n.tr("lightbox-close")).size(typography::BODY))
                .padding([spacing::XS, spacing::SM])
                .style(styles::button::lightbox_control)
                .on_press(Message::Gallery(GalleryEvent::CloseRequested)),
        );

    let previous = nav_button(
        "‹",
        i18n.tr("lightbox-previous"),
        display
            .prev_enabled
            .then_some(Message::Gallery(GalleryEvent::PrevRequested)),
    );
    let next = nav_button(
        "›",
        i18n.tr("lightbox-next"),
        display
            .next_enabled
            .then_some(Message::Gallery(GalleryEvent::NextRequested)),
    );
    let photo = Image::new(Handle::from_path(record.image()))
        .width(Length::Fill)
        .height(Length::Fill)
        .content_fit(ContentFit::Contain);
    let stage = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .height(Length::Fill)
        .push(previous)
        .push(photo)
        .push(next);

    let mut caption = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(record.title()).size(typography::TITLE_SM));
    if !record.description().is_empty() {
        caption = caption.push(Text::new(record.description()).size(typography::BODY));
    }

    let card = Column::new()
        .spacing(spacing::SM)
        .max_width(sizing::LIGHTBOX_MAX_WIDTH)
        .push(top_bar)
        .push(stage)
        .push(caption);

    // The card swallows its own clicks so only the backdrop closes the lightbox
    let backdrop = Container::new(opaque(card))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::backdrop);

    opaque(mouse_area(backdrop).on_press(Message::Gallery(GalleryEvent::CloseRequested)))
}

fn nav_button<'a>(
    glyph: &'a str,
    label: String,
    on_press: Option<Message>,
) -> Element<'a, Message> {
    let control = button(
        Text::new(glyph)
            .size(typography::TITLE_MD)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fixed(sizing::NAV_BUTTON_WIDTH))
    .padding([spacing::SM, spacing::XS])
    .style(styles::button::lightbox_control)
    .on_press_maybe(on_press);

    tooltip(
        control,
        Container::new(Text::new(label).size(typography::CAPTION))
            .padding([spacing::XXS, spacing::XS])
            .style(styles::container::position_counter),
        tooltip::Position::Top,
    )
    .into()
}
