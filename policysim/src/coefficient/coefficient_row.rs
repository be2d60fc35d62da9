use super::CoefficientError;
use crate::store::Table;
use serde::{Deserialize, Serialize};

/// a parameter name paired with its numeric value.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NamedParameter {
    pub name: String,
    pub value: f64,
}

/// one row of the coefficient table, validated at ingestion. each row
/// carries up to two named parameters for a (category, indicator) pair.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CoefficientRow {
    /// rail type, e.g. `고속철도`
    pub category: String,
    /// indicator code, e.g. `PAI`
    pub indicator: String,
    pub model_type: String,
    pub param1: Option<NamedParameter>,
    pub param2: Option<NamedParameter>,
}

/// positions of the coefficient table columns, found once from the header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoefficientColumns {
    rail_type: usize,
    kpi: usize,
    model_type: Option<usize>,
    param1_name: usize,
    param1_value: usize,
    param2_name: Option<usize>,
    param2_value: Option<usize>,
}

impl CoefficientColumns {
    pub const RAIL_TYPE: &str = "rail_type";
    pub const KPI: &str = "kpi";
    pub const MODEL_TYPE: &str = "model_type";
    pub const PARAM1_NAME: &str = "param1_name";
    pub const PARAM1_VALUE: &str = "param1_value";
    pub const PARAM2_NAME: &str = "param2_name";
    pub const PARAM2_VALUE: &str = "param2_value";

    /// locates the columns in `table`. `model_type` and the second
    /// parameter pair are optional.
    pub fn try_from_table(table: &Table) -> Result<CoefficientColumns, CoefficientError> {
        let required = |column: &str| {
            table
                .column_index(column)
                .ok_or_else(|| CoefficientError::MissingColumn(column.to_string()))
        };
        Ok(CoefficientColumns {
            rail_type: required(Self::RAIL_TYPE)?,
            kpi: required(Self::KPI)?,
            model_type: table.column_index(Self::MODEL_TYPE),
            param1_name: required(Self::PARAM1_NAME)?,
            param1_value: required(Self::PARAM1_VALUE)?,
            param2_name: table.column_index(Self::PARAM2_NAME),
            param2_value: table.column_index(Self::PARAM2_VALUE),
        })
    }
}

impl CoefficientRow {
    /// parses a raw table row.
    ///
    /// a parameter whose name or value is blank is left out. a parameter whose
    /// value is not numeric is also left out, and reported in the returned
    /// list of [`CoefficientError::MalformedRow`]s while the rest of the row
    /// is kept.
    ///
    /// # Errors
    ///
    /// a row with a blank category or indicator cannot be placed anywhere and
    /// is rejected as a whole.
    pub fn parse(
        index: usize,
        record: &[String],
        columns: &CoefficientColumns,
        baseline_model_type: &str,
    ) -> Result<(CoefficientRow, Vec<CoefficientError>), CoefficientError> {
        let field = |col: usize| record.get(col).map(|s| s.trim()).unwrap_or_default();
        let optional_field = |col: Option<usize>| col.map(field).unwrap_or_default();

        let category = field(columns.rail_type);
        if category.is_empty() {
            return Err(blank(index, CoefficientColumns::RAIL_TYPE));
        }
        let indicator = field(columns.kpi);
        if indicator.is_empty() {
            return Err(blank(index, CoefficientColumns::KPI));
        }
        let model_type = match optional_field(columns.model_type) {
            "" => baseline_model_type,
            m => m,
        };

        let mut errors = vec![];
        let param1 = parse_parameter(
            index,
            field(columns.param1_name),
            field(columns.param1_value),
            CoefficientColumns::PARAM1_VALUE,
        )
        .unwrap_or_else(|e| {
            errors.push(e);
            None
        });
        let param2 = parse_parameter(
            index,
            optional_field(columns.param2_name),
            optional_field(columns.param2_value),
            CoefficientColumns::PARAM2_VALUE,
        )
        .unwrap_or_else(|e| {
            errors.push(e);
            None
        });

        let row = CoefficientRow {
            category: category.to_string(),
            indicator: indicator.to_string(),
            model_type: model_type.to_string(),
            param1,
            param2,
        };
        Ok((row, errors))
    }
}

fn blank(row: usize, column: &str) -> CoefficientError {
    CoefficientError::MalformedRow {
        row,
        column: column.to_string(),
        value: String::new(),
        reason: String::from("is blank"),
    }
}

/// a blank name or value (including a `NaN` value) yields no parameter.
fn parse_parameter(
    row: usize,
    name: &str,
    value: &str,
    value_column: &str,
) -> Result<Option<NamedParameter>, CoefficientError> {
    if name.is_empty() || value.is_empty() {
        return Ok(None);
    }
    let parsed = value
        .parse::<f64>()
        .map_err(|e| CoefficientError::MalformedRow {
            row,
            column: value_column.to_string(),
            value: value.to_string(),
            reason: format!("is not numeric ({e})"),
        })?;
    if parsed.is_nan() {
        return Ok(None);
    }
    Ok(Some(NamedParameter {
        name: name.to_string(),
        value: parsed,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(text: &str) -> Table {
        Table::from_text(text, b'\t').expect("should parse")
    }

    #[test]
    fn test_missing_required_column() {
        let t = table("rail_type\tkpi\tparam1_name\n고속철도\tPAI\tw_도보\n");
        assert_eq!(
            CoefficientColumns::try_from_table(&t),
            Err(CoefficientError::MissingColumn(String::from("param1_value")))
        );
    }

    #[test]
    fn test_defaults_model_type_and_skips_blank_param2() {
        let t = table(
            "rail_type\tkpi\tparam1_name\tparam1_value\tparam2_name\tparam2_value\n\
             일반철도\tTF\tbeta\t0.25\t\t\n",
        );
        let columns = CoefficientColumns::try_from_table(&t).expect("columns");
        let (row, errors) = CoefficientRow::parse(0, &t.rows()[0], &columns, "A").expect("row");
        assert!(errors.is_empty());
        assert_eq!(row.model_type, "A");
        assert_eq!(
            row.param1,
            Some(NamedParameter {
                name: String::from("beta"),
                value: 0.25
            })
        );
        assert_eq!(row.param2, None);
    }

    #[test]
    fn test_non_numeric_value_drops_only_that_pair() {
        let t = table(
            "rail_type\tkpi\tmodel_type\tparam1_name\tparam1_value\tparam2_name\tparam2_value\n\
             광역철도\tTV\tB\tbeta\tabc\tgamma\t2\n",
        );
        let columns = CoefficientColumns::try_from_table(&t).expect("columns");
        let (row, errors) = CoefficientRow::parse(3, &t.rows()[0], &columns, "A").expect("row");
        assert_eq!(row.model_type, "B");
        assert_eq!(row.param1, None);
        assert_eq!(row.param2.map(|p| p.value), Some(2.0));
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            CoefficientError::MalformedRow { row: 3, column, .. } if column == "param1_value"
        ));
    }

    #[test]
    fn test_blank_category_rejects_row() {
        let t = table("rail_type\tkpi\tparam1_name\tparam1_value\n\tPAI\talpha\t1\n");
        let columns = CoefficientColumns::try_from_table(&t).expect("columns");
        let result = CoefficientRow::parse(0, &t.rows()[0], &columns, "A");
        assert!(result.is_err());
    }
}
