#[cfg(test)]
mod tests {
    use girder::{
        ColumnModification, ModificationCommand, ModificationCommandBatch, ResultSetMapping,
        TableRef, Value,
    };
    use girder_oracle::OracleUpdateSqlWriter;
    use indoc::indoc;

    const WRITER: OracleUpdateSqlWriter = OracleUpdateSqlWriter::new();

    #[test]
    fn batched_inserts_returning_generated_keys() {
        let mut batch = ModificationCommandBatch::new();
        for (write_parameter, read_parameter) in [("p0", "r0"), ("p1", "r1"), ("p2", "r2")] {
            batch.push(
                ModificationCommand::new(
                    TableRef::new("Orders"),
                    vec![
                        ColumnModification::write("Amount", write_parameter, Value::Int32(None)),
                        ColumnModification::read("Id", read_parameter, Value::Int32(None)),
                    ],
                )
                .unwrap(),
            );
        }
        let mut out = String::new();
        let mappings = batch.write(&WRITER, &mut out).unwrap();
        assert_eq!(mappings, vec![ResultSetMapping::LastInResultSet; 3]);
        assert_eq!(
            out,
            indoc! {r#"
                DECLARE
                TYPE efRowOrders_0 IS RECORD
                (
                Id NUMBER(10)
                );
                TYPE efOrders_0 IS TABLE OF efRowOrders_0;
                listOrders_0 efOrders_0;
                BEGIN
                listOrders_0 := efOrders_0();
                listOrders_0.extend(3);
                INSERT INTO "Orders" ("Amount")
                VALUES (:p0)
                RETURNING "Id" INTO listOrders_0(1);
                INSERT INTO "Orders" ("Amount")
                VALUES (:p1)
                RETURNING "Id" INTO listOrders_0(2);
                INSERT INTO "Orders" ("Amount")
                VALUES (:p2)
                RETURNING "Id" INTO listOrders_0(3);
                OPEN :cur0 FOR SELECT listOrders_0(1).Id FROM DUAL;
                OPEN :cur1 FOR SELECT listOrders_0(2).Id FROM DUAL;
                OPEN :cur2 FOR SELECT listOrders_0(3).Id FROM DUAL;
                END;
            "#}
        );
    }

    #[test]
    fn concurrency_checked_update_with_readback() {
        let mut batch = ModificationCommandBatch::new();
        batch.push(
            ModificationCommand::new(
                TableRef::new("Accounts"),
                vec![
                    ColumnModification::write("Balance", "p0", Value::Int64(None)),
                    ColumnModification::key("Id", "p1", Value::Int32(None)),
                    ColumnModification::condition("Version", "p2", Value::Int64(None)),
                    ColumnModification::read("Version", "p3", Value::Int64(None)),
                ],
            )
            .unwrap(),
        );
        let mut out = String::new();
        let mappings = batch.write(&WRITER, &mut out).unwrap();
        assert_eq!(mappings, vec![ResultSetMapping::LastInResultSet]);
        assert_eq!(
            out,
            indoc! {r#"
                DECLARE
                v_RowCount INTEGER;
                vp3_Version NUMBER(19);
                BEGIN
                UPDATE "Accounts" SET "Balance" = :p0
                WHERE "Id" = :p1 AND "Version" = :p2
                RETURN "Version" INTO vp3_Version;
                v_RowCount := SQL%ROWCOUNT;
                OPEN :cur0 FOR
                SELECT vp3_Version
                FROM DUAL
                WHERE v_RowCount = 1;
                END;
            "#}
        );
    }

    #[test]
    fn delete_reports_affected_rows() {
        let mut batch = ModificationCommandBatch::new();
        batch.push(
            ModificationCommand::new(
                TableRef::new("Accounts"),
                vec![ColumnModification::key("Id", "p0", Value::Int32(None))],
            )
            .unwrap(),
        );
        let mut out = String::new();
        let mappings = batch.write(&WRITER, &mut out).unwrap();
        assert_eq!(mappings, vec![ResultSetMapping::LastInResultSet]);
        assert_eq!(
            out,
            indoc! {r#"
                DECLARE
                v_RowCount INTEGER;
                BEGIN
                DELETE FROM "Accounts"
                WHERE "Id" = :p0;
                v_RowCount := SQL%ROWCOUNT;
                OPEN :cur0 FOR SELECT v_RowCount FROM DUAL;
                END;
            "#}
        );
    }

    #[test]
    fn mapping_order_follows_input_order() {
        let mut batch = ModificationCommandBatch::new();
        batch.push(
            ModificationCommand::new(
                TableRef::new("Orders"),
                vec![ColumnModification::write("Amount", "p0", Value::Int32(None))],
            )
            .unwrap(),
        );
        batch.push(
            ModificationCommand::new(
                TableRef::new("Orders"),
                vec![
                    ColumnModification::write("Amount", "p1", Value::Int32(None)),
                    ColumnModification::read("Id", "p2", Value::Int32(None)),
                ],
            )
            .unwrap(),
        );
        batch.push(
            ModificationCommand::new(
                TableRef::new("Accounts"),
                vec![ColumnModification::key("Id", "p3", Value::Int32(None))],
            )
            .unwrap(),
        );
        let mut out = String::new();
        let mappings = batch.write(&WRITER, &mut out).unwrap();
        assert_eq!(
            mappings,
            vec![
                ResultSetMapping::NoResultSet,
                ResultSetMapping::LastInResultSet,
                ResultSetMapping::LastInResultSet,
            ]
        );
    }

    #[test]
    fn empty_batch_is_rejected() {
        let batch = ModificationCommandBatch::new();
        let mut out = String::new();
        assert!(batch.write(&WRITER, &mut out).is_err());
    }
}
