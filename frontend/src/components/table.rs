use std::{fmt, rc::Rc};

use chrono::NaiveDate;
use leptos::*;

use crate::data::types::Money;
use crate::utils::format::currency;

/// One cell's raw value before any column transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Money(Money),
    Date(NaiveDate),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::Integer(value) => write!(f, "{}", value),
            FieldValue::Money(amount) => f.write_str(&currency(*amount)),
            FieldValue::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
        }
    }
}

/// Uniform records the table can render by field key.
pub trait TableRecord: Clone + 'static {
    fn record_id(&self) -> String;

    /// `None` for keys the record does not declare.
    fn field(&self, key: &str) -> Option<FieldValue>;
}

pub type CellRenderer<R> = Rc<dyn Fn(&FieldValue, &R) -> View>;
pub type RowActions<R> = Rc<dyn Fn(&R) -> View>;

pub struct Column<R> {
    pub key: &'static str,
    pub label: &'static str,
    pub render: Option<CellRenderer<R>>,
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            label: self.label,
            render: self.render.clone(),
        }
    }
}

impl<R: TableRecord> Column<R> {
    pub fn new(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            render: None,
        }
    }

    pub fn with_render(mut self, render: impl Fn(&FieldValue, &R) -> View + 'static) -> Self {
        self.render = Some(Rc::new(render));
        self
    }

    fn cell(&self, record: &R) -> View {
        match (record.field(self.key), &self.render) {
            (None, _) => ().into_view(),
            (Some(value), Some(render)) => render(&value, record),
            (Some(value), None) => value.to_string().into_view(),
        }
    }
}

/// Plain-text rendering of a record's row, columns in order; missing keys are empty.
pub fn default_cell_texts<R: TableRecord>(columns: &[Column<R>], record: &R) -> Vec<String> {
    columns
        .iter()
        .map(|column| {
            record
                .field(column.key)
                .map(|value| value.to_string())
                .unwrap_or_default()
        })
        .collect()
}

/// Row identity for keyed rendering; any change to a shown cell yields a new key.
pub fn row_key<R: TableRecord>(columns: &[Column<R>], record: &R) -> (String, Vec<String>) {
    (record.record_id(), default_cell_texts(columns, record))
}

#[component]
pub fn RecordTable<R: TableRecord>(
    columns: Vec<Column<R>>,
    #[prop(into)] records: Signal<Vec<R>>,
    #[prop(optional)] actions: Option<RowActions<R>>,
) -> impl IntoView {
    let has_actions = actions.is_some();
    let span = columns.len() + usize::from(has_actions);
    let columns = store_value(columns);
    let actions = store_value(actions);
    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-border">
                <thead class="bg-surface-muted">
                    <tr>
                        {columns.with_value(|columns| {
                            columns.iter().map(|column| view! {
                                <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">
                                    {column.label}
                                </th>
                            }).collect_view()
                        })}
                        {has_actions.then(|| view! {
                            <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">
                                "Actions"
                            </th>
                        })}
                    </tr>
                </thead>
                <tbody class="bg-surface-elevated divide-y divide-border">
                    <Show
                        when=move || !records.with(Vec::is_empty)
                        fallback=move || view! {
                            <tr>
                                <td class="px-6 py-4 text-sm text-fg-muted text-center" colspan=span.to_string()>
                                    "No records found"
                                </td>
                            </tr>
                        }
                    >
                        <For
                            each=move || records.get()
                            key=move |record: &R| columns.with_value(|columns| row_key(columns, record))
                            children=move |record: R| {
                                let cells = columns.with_value(|columns| {
                                    columns.iter().map(|column| view! {
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">
                                            {column.cell(&record)}
                                        </td>
                                    }).collect_view()
                                });
                                let action_cell = actions.with_value(|actions| {
                                    actions.as_ref().map(|produce| view! {
                                        <td class="px-6 py-4 whitespace-nowrap text-sm">{produce(&record)}</td>
                                    })
                                });
                                view! { <tr class="hover:bg-surface-muted">{cells}{action_cell}</tr> }
                            }
                        />
                    </Show>
                </tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Row {
        id: &'static str,
        name: &'static str,
        amount: Money,
    }

    impl TableRecord for Row {
        fn record_id(&self) -> String {
            self.id.to_string()
        }

        fn field(&self, key: &str) -> Option<FieldValue> {
            match key {
                "name" => Some(FieldValue::text(self.name)),
                "amount" => Some(FieldValue::Money(self.amount)),
                _ => None,
            }
        }
    }

    #[test]
    fn default_stringification_and_missing_keys() {
        let columns = vec![
            Column::<Row>::new("name", "Name"),
            Column::new("amount", "Amount"),
            Column::new("nickname", "Nickname"),
        ];
        let row = Row {
            id: "r1",
            name: "Ada",
            amount: 1_250,
        };
        assert_eq!(default_cell_texts(&columns, &row), vec!["Ada", "$1,250", ""]);
    }

    #[test]
    fn edited_rows_change_key() {
        let columns = vec![Column::<Row>::new("name", "Name"), Column::new("amount", "Amount")];
        let row = Row {
            id: "r1",
            name: "Ada",
            amount: 1_250,
        };
        let edited = Row {
            amount: 1_300,
            ..row.clone()
        };
        assert_eq!(row_key(&columns, &row), row_key(&columns, &row.clone()));
        assert_ne!(row_key(&columns, &row), row_key(&columns, &edited));
        assert_eq!(row_key(&columns, &edited).0, "r1");
    }

    #[test]
    fn field_values_display() {
        assert_eq!(FieldValue::Integer(160).to_string(), "160");
        assert_eq!(
            FieldValue::Date(NaiveDate::from_ymd_opt(2024, 2, 15).unwrap()).to_string(),
            "2024-02-15"
        );
    }
}
