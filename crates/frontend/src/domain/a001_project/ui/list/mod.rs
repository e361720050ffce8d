use crate::shared::api_error::ApiError;
use crate::shared::api_utils::api_url;
use crate::shared::i18n::I18nService;
use crate::shared::icons::icon;
use crate::domain::a001_project::ui::create::METADATA_PUBLIC;
use contracts::domain::a001_project::Project;
use contracts::domain::common::AggregateId;
use gloo_net::http::Request;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct ProjectRow {
    pub id: String,
    pub name: String,
    pub public: bool,
    pub created_at: String,
}

impl From<Project> for ProjectRow {
    fn from(p: Project) -> Self {
        Self {
            id: p.id.as_string(),
            public: p.metadata.get(METADATA_PUBLIC).is_some_and(|v| v == "true"),
            created_at: p.lifecycle.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            name: p.name,
        }
    }
}

/// Table of existing projects, re-fetched whenever `reload` changes.
#[component]
#[allow(non_snake_case)]
pub fn ProjectList(#[prop(into)] reload: Signal<u32>) -> impl IntoView {
    let i18n = use_context::<I18nService>().expect("I18nService not found in context");
    let (items, set_items) = signal::<Vec<ProjectRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_projects().await {
                Ok(v) => {
                    set_items.set(v.into_iter().map(Into::into).collect());
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("project list: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    };

    Effect::new(move |_| {
        reload.track();
        fetch();
    });

    view! {
        <div class="project-list">
            <div class="header__actions">
                <button class="button button--secondary" on:click=move |_| fetch()>
                    {icon("refresh")}
                </button>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__text">
                        {i18n.t("PROJECT.LOAD_FAILED")}": "{e}
                    </span>
                </div>
            })}

            <Show
                when=move || !items.get().is_empty()
                fallback=move || view! { <p class="form-hint">{move || i18n.t("PROJECT.EMPTY")}</p> }
            >
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{move || i18n.t("PROJECT.NAME")}</th>
                            <th class="table__header-cell">{move || i18n.t("PROJECT.ACCESS_LEVEL")}</th>
                            <th class="table__header-cell">{move || i18n.t("PROJECT.CREATION_TIME")}</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || items.get()
                            key=|row| row.id.clone()
                            children=move |row| {
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{row.name}</td>
                                        <td class="table__cell">
                                            {row.public.then(|| icon("check"))}
                                        </td>
                                        <td class="table__cell">{row.created_at}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </div>
    }
}

async fn fetch_projects() -> Result<Vec<Project>, ApiError> {
    let response = Request::get(&api_url("/api/projects"))
        .header("Accept", "application/json")
        .send()
        .await?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response.json::<Vec<Project>>().await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_project::ProjectMetadata;

    #[test]
    fn test_row_reads_public_flag() {
        let mut metadata = ProjectMetadata::new();
        metadata.insert(METADATA_PUBLIC.to_string(), "true".to_string());
        let row = ProjectRow::from(Project::new_for_insert("library".into(), metadata));
        assert_eq!(row.name, "library");
        assert!(row.public);

        let row = ProjectRow::from(Project::new_for_insert("private".into(), Default::default()));
        assert!(!row.public);
    }
}
