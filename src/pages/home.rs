use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::force_graph::ForceGraphCanvas;
use crate::components::modal::AbstractModal;
use crate::config::MindMapConfig;
use crate::mindmap::{AbstractDetail, AbstractIndex, KeywordBank, load_mindmap};

/// Detail to show for a clicked node; keyword and stale ids give `None`.
fn selected_detail(index: &AbstractIndex, id: &str) -> Option<AbstractDetail> {
	index.get(id).cloned()
}

/// Mind map of the configured dataset with a detail dialog per abstract.
///
/// `?data=<url>` picks the dataset and `?mode=predicted` switches from the
/// supplied keyword lists to predicted ones.
#[component]
pub fn Home() -> impl IntoView {
	let query = use_query_map();
	let config = Memo::new(move |_| {
		query.with(|q| MindMapConfig::from_query(q.get("data").as_deref(), q.get("mode").as_deref()))
	});

	// every (re)load builds a fresh map and replaces the previous one
	let mindmap = LocalResource::new(move || {
		let config = config.get();
		async move {
			let loaded = match config {
				Ok(config) => load_mindmap(&config, &KeywordBank::default()).await,
				Err(err) => Err(err.into()),
			};
			if let Err(err) = &loaded {
				log::error!("{err}");
			}
			loaded
		}
	});

	let graph = Signal::derive(move || {
		mindmap
			.get()
			.and_then(Result::ok)
			.map(|map| map.graph)
			.unwrap_or_default()
	});
	let index = Signal::derive(move || {
		mindmap
			.get()
			.and_then(Result::ok)
			.map(|map| map.index)
			.unwrap_or_default()
	});

	let selected = RwSignal::new(None::<AbstractDetail>);
	let on_select = Callback::new(move |id: String| {
		if let Some(detail) = index.with(|index| selected_detail(index, &id)) {
			selected.set(Some(detail));
		}
	});
	let on_close = Callback::new(move |_: ()| selected.set(None));
	let reload = move |_| {
		selected.set(None);
		mindmap.refetch();
	};

	let layout = config.get_untracked().map(|c| c.layout).unwrap_or_default();

	view! {
		<div class="page">
			<header class="toolbar">
				<h1>"Abstract Mind Map"</h1>
				<span class="mode-badge">
					{move || config.get().map(|c| format!("{} keywords", c.mode)).unwrap_or_default()}
				</span>
				<button class="reload" on:click=reload>"Reload"</button>
			</header>

			{move || match mindmap.get() {
				None => view! { <p class="status">"Loading abstracts…"</p> }.into_any(),
				Some(Err(err)) => {
					view! {
						<div class="error-panel" role="alert">
							<h2>"Could not load the mind map"</h2>
							<p>{err.to_string()}</p>
						</div>
					}
						.into_any()
				}
				Some(Ok(map)) if map.skipped > 0 => {
					view! {
						<p class="notice">
							{format!("{} of the dataset's records were skipped.", map.skipped)}
						</p>
					}
						.into_any()
				}
				Some(Ok(_)) => ().into_any(),
			}}

			<div class="mindmap">
				<ForceGraphCanvas data=graph layout=layout on_select=on_select />
			</div>

			<AbstractModal detail=selected on_close=on_close />
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::mindmap::{AbstractRecord, KeywordMode, MindMapBuilder};

	#[test]
	fn only_abstract_ids_select() {
		let bank = KeywordBank::default();
		let records = [Ok(AbstractRecord::with_keywords("Citizen sensors", &["sensors"]))];
		let map = MindMapBuilder::new(KeywordMode::Explicit, &bank).build(&records);

		let detail = selected_detail(&map.index, "abstract-0").unwrap();
		assert_eq!(detail.text, "Citizen sensors");
		assert_eq!(detail.keywords, ["sensors"]);
		assert!(selected_detail(&map.index, "abstract-0-kw-0").is_none());
		assert!(selected_detail(&map.index, "abstract-7").is_none());
	}
}
