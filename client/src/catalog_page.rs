use seed::browser::fetch;
use seed::{self, prelude::*, *};
use serde::de::DeserializeOwned;
use shared::render::{
    FilterButton, Listing, Region, RenderTarget, RomCard, TagOption, DOWNLOAD_TARGET,
    EMPTY_MESSAGE,
};
use shared::{Catalog, Rom};

#[derive(Default)]
pub struct Model {
    pub catalog: Catalog,
    pub loaded: bool,
}

pub enum Msg {
    TagsFetched(fetch::Result<Vec<String>>),
    RomsFetched(fetch::Result<Vec<Rom>>),
    FilterClicked(usize),
    Search(String),
}

/// What `update` still has to ask of seed after a message was applied.
#[derive(Debug, PartialEq)]
enum Next {
    Render,
    Skip,
    FetchRoms,
}

pub fn update(msg: Msg, model: &mut Model, orders: &mut impl Orders<Msg>) {
    match apply(msg, model) {
        Next::Render => {}
        Next::Skip => {
            orders.skip();
        }
        Next::FetchRoms => {
            orders
                .skip()
                .perform_cmd(async { Msg::RomsFetched(fetch_json(shared::ROMS_URL).await) });
        }
    }
}

fn apply(msg: Msg, model: &mut Model) -> Next {
    match msg {
        // the entries are only requested once the tag vocabulary settled
        Msg::TagsFetched(fetched) => {
            if let Err(fail_reason) = model.catalog.load_tags(fetched) {
                error!("Error loading tags:", fail_reason);
            }
            Next::FetchRoms
        }

        Msg::RomsFetched(fetched) => {
            if let Err(fail_reason) = model.catalog.load_roms(fetched) {
                error!("Error loading ROMs:", fail_reason);
            }
            model.loaded = true;
            Next::Render
        }

        Msg::FilterClicked(index) => match model.catalog.select_category(index) {
            Some(_) => Next::Render,
            None => Next::Skip,
        },

        Msg::Search(keyword) => {
            model.catalog.search(&keyword);
            Next::Render
        }
    }
}

pub async fn fetch_json<T: DeserializeOwned + 'static>(url: &'static str) -> fetch::Result<T> {
    fetch::fetch(url).await?.check_status()?.json().await
}

pub fn view(model: &Model) -> Vec<Node<Msg>> {
    if !model.loaded {
        return nodes![div![
            attrs![At::Class => "spinner-border text-secondary"],
            span![attrs![At::Class => "sr-only"], "Loading..."],
        ]];
    }

    let mut page = PageNodes::default();
    model.catalog.render(&mut page);
    page.into_nodes()
}

/// Seed nodes for each region, filled through [`RenderTarget`].
#[derive(Default)]
struct PageNodes {
    filters: Vec<Node<Msg>>,
    roms: Vec<Node<Msg>>,
    tags: Vec<Node<Msg>>,
}

impl PageNodes {
    fn into_nodes(self) -> Vec<Node<Msg>> {
        nodes![
            div![
                id!(Region::Filters.id()),
                attrs! {At::Class => "filters"},
                self.filters
            ],
            div![
                id!(Region::Roms.id()),
                attrs! {At::Class => "rom-grid"},
                self.roms
            ],
            div![
                id!(Region::Tags.id()),
                attrs! {At::Class => "tag-options"},
                self.tags
            ],
        ]
    }
}

impl RenderTarget for PageNodes {
    fn filters(&mut self, buttons: &[FilterButton]) {
        self.filters = buttons.iter().map(filter_button).collect();
    }

    fn roms(&mut self, listing: &Listing<'_>) {
        self.roms = match listing {
            Listing::Empty => nodes![p![EMPTY_MESSAGE]],
            Listing::Cards(cards) => cards.iter().map(rom_card).collect(),
        };
    }

    fn tags(&mut self, options: &[TagOption<'_>]) {
        self.tags = options.iter().map(tag_option).collect();
    }
}

fn filter_button(btn: &FilterButton) -> Node<Msg> {
    let index = btn.index;
    button![
        attrs! {
            At::Class => if btn.active { "filter-btn active" } else { "filter-btn" },
            At::from("data-filter") => btn.value,
        },
        ev(Ev::Click, move |_| Msg::FilterClicked(index)),
        btn.label
    ]
}

fn rom_card(card: &RomCard<'_>) -> Node<Msg> {
    div![
        attrs! {At::Class => "rom-card"},
        img![attrs! {At::Src => card.thumbnail, At::Alt => card.alt}],
        div![
            attrs! {At::Class => "rom-content"},
            h3![card.name],
            p![card.description],
            div![
                attrs! {At::Class => "tags"},
                card.tags
                    .iter()
                    .map(|tag| span![attrs! {At::Class => "tag"}, tag.as_str()])
            ],
            a![
                attrs! {At::Class => "download-btn",
                At::Href => card.download,
                At::Target => DOWNLOAD_TARGET},
                "Download"
            ],
        ],
    ]
}

fn tag_option(option: &TagOption<'_>) -> Node<Msg> {
    label![
        attrs! {At::Class => "tag-option"},
        input![attrs! {At::Type => "checkbox", At::Value => option.value}],
        option.value
    ]
}
