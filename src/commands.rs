use std::{sync::Arc, time::Duration};

use anyhow::{anyhow, bail, Context as _, Result};
use truthspot_application::prelude::{self as app, RetrievalState, Session, SpotList, ViewportTracker};
use truthspot_core::{
    catalog::Catalog,
    cluster::MapFeature,
    entities::*,
    gateways::backend::{Credentials, SpotGateway},
    marker::{tag_labels, MarkerSizing, SpotMarker},
    mode::Interaction,
    selection::Selection,
    usecases,
};
use truthspot_gateways::{geolocation::FixedPosition, pocketbase::PocketBase};

use crate::{
    cli::{Cli, Command, NewSpotArgs, Region},
    config::Config,
};

struct Context {
    cfg: Config,
    backend: PocketBase,
    session: Session,
}

pub async fn run(cfg: Config, cli: Cli) -> Result<()> {
    let Cli {
        email,
        password,
        command,
        config: _,
    } = cli;
    let backend = PocketBase::new(cfg.backend.base_url.clone());
    let session = match &command {
        Command::Register { .. } => Session::anonymous(),
        _ => sign_in(&backend, email.clone(), password.clone()).await?,
    };
    let backend = match session.token() {
        Some(token) => backend.authorized(token),
        None => backend,
    };
    let ctx = Context {
        cfg,
        backend,
        session,
    };

    match command {
        Command::Spots(region) => spots(&ctx, region, false).await,
        Command::Clusters(region) => spots(&ctx, region, true).await,
        Command::Watch {
            regions,
            zoom,
            interval,
        } => watch(&ctx, regions, zoom, interval).await,
        Command::Create(args) => create(&ctx, args).await,
        Command::Publish { id } => change_visibility(&ctx, id.into(), Visibility::Public).await,
        Command::Unpublish { id } => change_visibility(&ctx, id.into(), Visibility::Private).await,
        Command::Delete { id } => {
            let id = Id::from(id);
            app::delete_spot(&ctx.backend, &ctx.session, &id, &mut SpotList::default()).await?;
            println!("Deleted spot {id}");
            Ok(())
        }
        Command::Mine => mine(&ctx).await,
        Command::Categories => {
            let catalog = app::load_catalog(&ctx.backend).await?;
            for line in category_tree(&catalog) {
                println!("{line}");
            }
            Ok(())
        }
        Command::Tags { category } => tags(&ctx, category).await,
        Command::AuthMethods => {
            let providers = app::auth_providers(&ctx.backend).await?;
            println!("password");
            for provider in providers {
                println!("{provider}");
            }
            Ok(())
        }
        Command::ViewUrl { view, spot } => view_url(&ctx, view, spot).await,
        Command::Locate => locate(&ctx).await,
        Command::Register {
            password_confirmation,
        } => {
            let registration = usecases::Registration {
                email: email.context("Missing email address")?,
                password: password.context("Missing password")?,
                password_confirmation,
            };
            let session = app::register(&ctx.backend, &registration).await?;
            if let Some(user) = session.user() {
                println!("Registered {} ({})", user.email, user.id);
            }
            Ok(())
        }
    }
}

async fn sign_in(
    backend: &PocketBase,
    email: Option<String>,
    password: Option<String>,
) -> Result<Session> {
    let session = match (email, password) {
        (Some(email), Some(password)) => {
            app::login(backend, &Credentials { email, password }).await?
        }
        (Some(_), None) => bail!("Missing password"),
        _ => Session::anonymous(),
    };
    Ok(session)
}

fn region_bbox(cfg: &Config, region: Region) -> (MapBbox, Zoom) {
    let Region { bbox, view, zoom } = region;
    let view = cfg.map.initial_view(view.as_deref());
    let zoom = zoom
        .unwrap_or(view.zoom)
        .clamp(cfg.map.min_zoom, cfg.map.max_zoom);
    let bbox = bbox.unwrap_or_else(|| cfg.map.initial_bbox(&view));
    (bbox, zoom)
}

async fn spots(ctx: &Context, region: Region, clustered: bool) -> Result<()> {
    let (bbox, zoom) = region_bbox(&ctx.cfg, region);
    let (catalog, spots) = tokio::try_join!(
        app::load_catalog(&ctx.backend),
        app::retrieve_spots(
            &ctx.backend,
            &ctx.session,
            bbox,
            zoom,
            &ctx.cfg.retrieval.limits
        )
    )?;
    let mut list = SpotList::default();
    list.replace(spots);
    let now = Timestamp::now();
    let sizing = &ctx.cfg.markers.sizing;
    println!("{} spots in {bbox} at zoom {zoom}", list.len());
    if clustered {
        let features = list.features(&catalog, sizing, &ctx.cfg.markers.clustering, zoom, now);
        for feature in &features {
            println!("{}", describe_feature(feature, &list, &catalog));
        }
    } else {
        for spot in list.spots() {
            println!("{}", describe_spot(spot, &catalog, sizing, zoom, now));
        }
    }
    Ok(())
}

async fn watch(ctx: &Context, regions: Vec<MapBbox>, zoom: Zoom, interval: Duration) -> Result<()> {
    let catalog = app::load_catalog(&ctx.backend).await?;
    let mut tracker = ViewportTracker::new(
        Arc::new(ctx.backend.clone()),
        ctx.session.clone(),
        ctx.cfg.retrieval.limits,
        ctx.cfg.retrieval.debounce,
    );
    let mut rx = tracker.subscribe();
    let mut pending = regions.into_iter();
    let mut latest = None;
    let mut ticks = tokio::time::interval(interval);
    loop {
        tokio::select! {
            _ = ticks.tick(), if pending.len() > 0 => {
                if let Some(bbox) = pending.next() {
                    println!("Viewport changed to {bbox}");
                    latest = Some(tracker.viewport_changed(bbox, zoom));
                }
            }
            changed = rx.changed() => {
                changed?;
                let state = rx.borrow_and_update().clone();
                match &state {
                    RetrievalState::Idle => {}
                    RetrievalState::Loading { bbox, zoom, .. } => {
                        println!("Loading spots in {bbox} at zoom {zoom}");
                    }
                    RetrievalState::Loaded { spots, bbox, zoom, .. } => {
                        println!("{} spots in {bbox}", spots.len());
                        let now = Timestamp::now();
                        for spot in spots {
                            println!("{}", describe_spot(spot, &catalog, &ctx.cfg.markers.sizing, *zoom, now));
                        }
                    }
                    RetrievalState::Failed { message, .. } => {
                        println!("Failed to load spots: {message}");
                    }
                }
                if pending.len() == 0 && state.is_settled() && state.generation() == latest {
                    return Ok(());
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracker.cancel();
                return Ok(());
            }
        }
    }
}

/// Resolves category and tag names along the cascading selection.
fn select(catalog: &Catalog, categories: &[String], tags: &[String]) -> Result<Selection> {
    let matches = |id: &Id, name: &str, wanted: &str| id.as_str() == wanted || name.eq_ignore_ascii_case(wanted);
    let mut selection = Selection::default();
    for (level, wanted) in categories.iter().enumerate() {
        let candidates: Vec<&Category> = match (level, selection.deepest_category()) {
            (0, _) => catalog.root_categories().collect(),
            (_, Some(parent)) => catalog.child_categories(parent).collect(),
            (_, None) => vec![],
        };
        let id = candidates
            .into_iter()
            .find(|c| matches(&c.id, &c.name, wanted))
            .map(|c| c.id.clone())
            .ok_or_else(|| anyhow!("Unknown category '{wanted}' at level {}", level + 1))?;
        selection.select_category(catalog, level, id);
    }
    for wanted in tags {
        let id = selection
            .available_tags(catalog)
            .into_iter()
            .find(|t| matches(&t.id, &t.name, wanted))
            .map(|t| t.id.clone())
            .ok_or_else(|| anyhow!("Tag '{wanted}' is not available for the selected category"))?;
        if !selection.tags().contains(&id) {
            selection.toggle_tag(id);
        }
    }
    Ok(selection)
}

async fn create(ctx: &Context, args: NewSpotArgs) -> Result<()> {
    let NewSpotArgs {
        name,
        description,
        pos,
        zoom,
        categories,
        tags,
        private,
    } = args;
    let map = &ctx.cfg.map;
    let zoom = zoom.unwrap_or(map.created_spot_zoom);
    let catalog = app::load_catalog(&ctx.backend).await?;
    let selection = select(&catalog, &categories, &tags)?;

    let mut interaction = Interaction::default();
    let pos = app::start_drop(&mut interaction, &ctx.session, map, zoom, pos)?;
    let draft = usecases::SpotDraft {
        name,
        description,
        pos,
        category: None,
        tags: vec![],
        visibility: if private {
            Visibility::Private
        } else {
            Visibility::Public
        },
    }
    .with_selection(&selection)?;
    let spot = app::create_spot(&ctx.backend, &ctx.session, draft, &mut SpotList::default()).await?;
    app::finish_drop(&mut interaction);

    let view = map.focus_created_spot(&spot);
    println!("Created spot {}", spot.id);
    println!(
        "{}",
        describe_spot(&spot, &catalog, &ctx.cfg.markers.sizing, view.zoom, Timestamp::now())
    );
    println!("{}", app::view_url(&ctx.cfg.app_url, &view));
    Ok(())
}

async fn change_visibility(ctx: &Context, id: Id, visibility: Visibility) -> Result<()> {
    let spot = app::change_spot_visibility(
        &ctx.backend,
        &ctx.session,
        &id,
        visibility,
        &mut SpotList::default(),
    )
    .await?;
    println!("Spot {} is now {}", spot.id, spot.visibility);
    Ok(())
}

async fn mine(ctx: &Context) -> Result<()> {
    let (catalog, spots) = tokio::try_join!(
        app::load_catalog(&ctx.backend),
        app::own_spots(&ctx.backend, &ctx.session)
    )?;
    let now = Timestamp::now();
    let zoom = ctx.cfg.map.default_zoom;
    for spot in &spots {
        println!("{}", describe_spot(spot, &catalog, &ctx.cfg.markers.sizing, zoom, now));
    }
    Ok(())
}

async fn tags(ctx: &Context, category: Option<String>) -> Result<()> {
    let catalog = app::load_catalog(&ctx.backend).await?;
    let tags = match category {
        Some(wanted) => {
            let category = catalog
                .categories()
                .iter()
                .find(|c| c.id.as_str() == wanted || c.name.eq_ignore_ascii_case(&wanted))
                .ok_or_else(|| anyhow!("Unknown category '{wanted}'"))?;
            catalog.tags_of_category(&category.id)
        }
        None => catalog.tags().iter().collect(),
    };
    for tag in tags {
        let icon = if tag.icon.is_empty() {
            Tag::DEFAULT_ICON
        } else {
            &tag.icon
        };
        println!("{icon} {} ({})", tag.name, tag.id);
    }
    Ok(())
}

async fn view_url(ctx: &Context, view: Option<String>, spot: Option<String>) -> Result<()> {
    let map = &ctx.cfg.map;
    let view = match spot {
        Some(id) => {
            let spot = ctx.backend.get_spot(&id.into(), false).await?;
            map.focus_selected_spot(&spot)
        }
        None => map.initial_view(view.as_deref()),
    };
    println!("{}", app::view_url(&ctx.cfg.app_url, &view));
    Ok(())
}

async fn locate(ctx: &Context) -> Result<()> {
    let geolocation = FixedPosition::new(ctx.cfg.geolocation.fallback_position);
    let view = ctx
        .cfg
        .map
        .locate(&geolocation, &ctx.cfg.geolocation.options)
        .await?;
    println!("{view}");
    println!("{}", app::view_url(&ctx.cfg.app_url, &view));
    Ok(())
}

fn describe_spot(spot: &Spot, catalog: &Catalog, sizing: &MarkerSizing, zoom: Zoom, now: Timestamp) -> String {
    let marker = SpotMarker::new(spot, catalog, sizing, zoom, now);
    let mut line = format!(
        "{} {} [{}] at {} ({})",
        marker.label(),
        marker.name,
        marker.spot_id,
        marker.pos,
        marker.age
    );
    let tags: Vec<_> = tag_labels(spot, catalog)
        .into_iter()
        .map(|t| format!("{}{}", t.icon, t.name))
        .collect();
    if !tags.is_empty() {
        line.push(' ');
        line.push_str(&tags.join(" "));
    }
    line
}

fn describe_feature(feature: &MapFeature, list: &SpotList, catalog: &Catalog) -> String {
    match feature {
        MapFeature::Single(marker) => {
            let tags = list
                .get(&marker.spot_id)
                .map(|spot| tag_labels(spot, catalog).len())
                .unwrap_or_default();
            format!(
                "{} {} [{}] at {} ({} tags, {}px)",
                marker.label(),
                marker.name,
                marker.spot_id,
                marker.pos,
                tags,
                marker.size.size
            )
        }
        MapFeature::Cluster { center, count, .. } => format!("({count}) cluster at {center}"),
    }
}

fn category_tree(catalog: &Catalog) -> Vec<String> {
    fn walk(catalog: &Catalog, category: &Category, depth: usize, lines: &mut Vec<String>) {
        let tags: Vec<_> = catalog
            .tags_of_category(&category.id)
            .into_iter()
            .map(|t| t.name.as_str())
            .collect();
        let mut line = format!(
            "{}{} {} ({})",
            "  ".repeat(depth),
            category.icon(),
            category.name,
            category.id
        );
        if !tags.is_empty() {
            line.push_str(&format!(" tags: {}", tags.join(", ")));
        }
        lines.push(line);
        if depth + 1 < Category::MAX_DEPTH {
            for child in catalog.child_categories(&category.id) {
                walk(catalog, child, depth + 1, lines);
            }
        }
    }
    let mut lines = vec![];
    for root in catalog.root_categories() {
        walk(catalog, root, 0, &mut lines);
    }
    lines
}
