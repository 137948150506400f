use yew::prelude::*;

/// Anything that can be grouped under a category label.
pub trait Categorized {
    fn category(&self) -> &str;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveCategory {
    #[default]
    All,
    Named(&'static str),
}

impl ActiveCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ActiveCategory::All => "All",
            ActiveCategory::Named(name) => *name,
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            ActiveCategory::All => true,
            ActiveCategory::Named(name) => *name == category,
        }
    }
}

/// The items shown under `active`, in their original order.
pub fn filter_by_category<'a, T: Categorized>(items: &'a [T], active: &ActiveCategory) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| active.matches(item.category()))
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct CategoryBarProps {
    pub categories: &'static [&'static str],
    pub active: ActiveCategory,
    pub on_select: Callback<ActiveCategory>,
}

#[function_component(CategoryBar)]
pub fn category_bar(props: &CategoryBarProps) -> Html {
    let options = std::iter::once(ActiveCategory::All)
        .chain(props.categories.iter().map(|c| ActiveCategory::Named(*c)));

    html! {
        <div class="category-bar">
            { for options.enumerate().map(|(index, option)| {
                let onclick = {
                    let on_select = props.on_select.clone();
                    Callback::from(move |_: MouseEvent| on_select.emit(option))
                };
                html! {
                    <button
                        key={option.label()}
                        class={classes!("category-chip", (props.active == option).then(|| "active"))}
                        style={format!("animation-delay: {}s;", index as f64 * 0.05)}
                        onclick={onclick}
                    >
                        {option.label()}
                    </button>
                }
            }) }
            <style>
                {r#"
                    .category-bar {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 0.75rem;
                        margin-bottom: 3rem;
                    }
                    .category-chip {
                        padding: 0.5rem 1.25rem;
                        border-radius: 999px;
                        font-size: 0.875rem;
                        font-weight: 500;
                        cursor: pointer;
                        color: var(--muted);
                        background: rgba(14, 22, 38, 0.6);
                        border: 1px solid var(--border);
                        transition: all 0.3s ease;
                        animation: chip-in 0.4s ease-out both;
                    }
                    .category-chip:hover {
                        color: var(--foreground);
                        transform: translateY(-2px) scale(1.05);
                    }
                    .category-chip:active {
                        transform: scale(0.95);
                    }
                    .category-chip.active {
                        color: var(--primary-foreground);
                        background: var(--primary);
                        box-shadow: 0 8px 24px var(--glow);
                    }
                    @keyframes chip-in {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Record {
        id: u32,
        category: &'static str,
    }

    impl Categorized for Record {
        fn category(&self) -> &str {
            self.category
        }
    }

    const CATEGORIES: [&str; 4] = ["Workshops", "Competitions", "Talks", "Social"];

    fn records() -> Vec<Record> {
        [
            "Workshops",
            "Competitions",
            "Talks",
            "Competitions",
            "Social",
            "Workshops",
            "Competitions",
            "Talks",
        ]
        .iter()
        .enumerate()
        .map(|(i, &category)| Record {
            id: i as u32 + 1,
            category,
        })
        .collect()
    }

    fn ids(items: &[&Record]) -> Vec<u32> {
        items.iter().map(|r| r.id).collect()
    }

    #[test]
    fn competitions_yields_matching_records_in_order() {
        let all = records();
        let shown = filter_by_category(&all, &ActiveCategory::Named("Competitions"));
        assert_eq!(ids(&shown), vec![2, 4, 7]);
    }

    #[test]
    fn all_yields_full_collection_in_order() {
        let all = records();
        let shown = filter_by_category(&all, &ActiveCategory::All);
        assert_eq!(ids(&shown), (1..=8).collect::<Vec<_>>());
    }

    #[test]
    fn every_category_yields_only_its_own_records() {
        let all = records();
        let mut total = 0;
        for category in CATEGORIES {
            let shown = filter_by_category(&all, &ActiveCategory::Named(category));
            assert!(shown.iter().all(|r| r.category == category));
            total += shown.len();
        }
        assert_eq!(total, all.len());
    }

    #[test]
    fn unknown_category_yields_nothing() {
        let all = records();
        assert!(filter_by_category(&all, &ActiveCategory::Named("Sports")).is_empty());
    }

    #[test]
    fn selecting_twice_is_idempotent() {
        let all = records();
        let once = ActiveCategory::Named("Talks");
        let twice = once;
        assert_eq!(
            ids(&filter_by_category(&all, &once)),
            ids(&filter_by_category(&all, &twice))
        );
    }

    #[test]
    fn sentinel_is_default_and_labelled_all() {
        assert_eq!(ActiveCategory::default(), ActiveCategory::All);
        assert_eq!(ActiveCategory::All.label(), "All");
        assert_eq!(ActiveCategory::Named("IoT").label(), "IoT");
    }
}
