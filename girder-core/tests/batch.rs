#[cfg(test)]
mod tests {
    use girder_core::{
        BatchContext, ColumnModification, GenericUpdateSqlWriter, ModificationCommand,
        ModificationCommandBatch, ResultSetMapping, TableRef, UpdateSqlWriter, Value,
    };
    use indoc::indoc;

    const WRITER: GenericUpdateSqlWriter = GenericUpdateSqlWriter::new();

    fn insert_with_read(table: &str, write_parameter: &str, read_parameter: &str) -> ModificationCommand {
        ModificationCommand::new(
            TableRef::new(table),
            vec![
                ColumnModification::write("Amount", write_parameter, Value::Int32(None)),
                ColumnModification::read("Id", read_parameter, Value::Int32(None)),
            ],
        )
        .unwrap()
    }

    #[test]
    fn empty_batch_is_rejected() {
        let batch = ModificationCommandBatch::new();
        let mut out = String::new();
        let error = batch.write(&WRITER, &mut out).unwrap_err();
        assert!(error.to_string().contains("empty batch"));
    }

    #[test]
    fn consecutive_inserts_share_one_collection() {
        let mut batch = ModificationCommandBatch::new();
        batch.push(insert_with_read("Orders", "p0", "r0"));
        batch.push(insert_with_read("Orders", "p1", "r1"));
        batch.push(insert_with_read("Orders", "p2", "r2"));
        let mut out = String::new();
        let mappings = batch.write(&WRITER, &mut out).unwrap();
        assert_eq!(mappings, vec![ResultSetMapping::LastInResultSet; 3]);
        assert_eq!(
            out,
            indoc! {r#"
                DECLARE
                TYPE efRowOrders_0 IS RECORD
                (
                Id INTEGER
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
    fn single_insert_skips_the_collection() {
        let mut batch = ModificationCommandBatch::new();
        batch.push(insert_with_read("Orders", "p0", "r0"));
        let mut out = String::new();
        let mappings = batch.write(&WRITER, &mut out).unwrap();
        assert_eq!(mappings, vec![ResultSetMapping::LastInResultSet]);
        assert_eq!(
            out,
            indoc! {r#"
                DECLARE
                vr0_Id INTEGER;
                BEGIN
                INSERT INTO "Orders" ("Amount")
                VALUES (:p0)
                RETURNING "Id" INTO vr0_Id;
                OPEN :cur0 FOR SELECT vr0_Id FROM DUAL;
                END;
            "#}
        );
    }

    #[test]
    fn differing_read_shapes_break_the_run() {
        let mut batch = ModificationCommandBatch::new();
        batch.push(insert_with_read("Orders", "p0", "r0"));
        batch.push(
            ModificationCommand::new(
                TableRef::new("Orders"),
                vec![ColumnModification::write("Amount", "p1", Value::Int32(None))],
            )
            .unwrap(),
        );
        let mut out = String::new();
        let mappings = batch.write(&WRITER, &mut out).unwrap();
        assert_eq!(
            mappings,
            vec![
                ResultSetMapping::LastInResultSet,
                ResultSetMapping::NoResultSet,
            ]
        );
        assert!(!out.contains("listOrders"));
        assert_eq!(
            out,
            indoc! {r#"
                DECLARE
                vr0_Id INTEGER;
                BEGIN
                INSERT INTO "Orders" ("Amount")
                VALUES (:p0)
                RETURNING "Id" INTO vr0_Id;
                OPEN :cur0 FOR SELECT vr0_Id FROM DUAL;
                INSERT INTO "Orders" ("Amount")
                VALUES (:p1);
                END;
            "#}
        );
    }

    #[test]
    fn differing_read_prototypes_break_the_run() {
        let mut batch = ModificationCommandBatch::new();
        batch.push(insert_with_read("Orders", "p0", "r0"));
        batch.push(
            ModificationCommand::new(
                TableRef::new("Orders"),
                vec![
                    ColumnModification::write("Amount", "p1", Value::Int32(None)),
                    ColumnModification::read("Id", "r1", Value::Int64(None)),
                ],
            )
            .unwrap(),
        );
        let mut out = String::new();
        let mappings = batch.write(&WRITER, &mut out).unwrap();
        assert_eq!(mappings, vec![ResultSetMapping::LastInResultSet; 2]);
        assert!(!out.contains("listOrders"));
        assert!(out.contains("vr0_Id INTEGER;\n"));
        assert!(out.contains("vr1_Id BIGINT;\n"));
    }

    #[test]
    fn batched_insert_group_contract_checks() {
        let mut out = String::new();
        let mut ctx = BatchContext::new();
        let error = WRITER
            .write_batch_insert(&mut out, &mut ctx, &[], 0)
            .unwrap_err();
        assert!(error.to_string().contains("empty command group"));
        let mismatched = vec![
            insert_with_read("Orders", "p0", "r0"),
            insert_with_read("Invoices", "p1", "r1"),
        ];
        let error = WRITER
            .write_batch_insert(&mut out, &mut ctx, &mismatched, 0)
            .unwrap_err();
        assert!(error.to_string().contains("share one table"));
        let with_update = vec![
            insert_with_read("Orders", "p0", "r0"),
            ModificationCommand::new(
                TableRef::new("Orders"),
                vec![
                    ColumnModification::write("Amount", "p1", Value::Int32(None)),
                    ColumnModification::key("Id", "p2", Value::Int32(None)),
                ],
            )
            .unwrap(),
        ];
        let error = WRITER
            .write_batch_insert(&mut out, &mut ctx, &with_update, 0)
            .unwrap_err();
        assert!(error.to_string().contains("Expected insert commands"));
    }

    #[test]
    fn mixed_batch_numbers_cursors_in_generation_order() {
        let mut batch = ModificationCommandBatch::new();
        batch.push(insert_with_read("Orders", "p0", "p1"));
        batch.push(
            ModificationCommand::new(
                TableRef::new("Accounts"),
                vec![
                    ColumnModification::write("Balance", "p2", Value::Int64(None)),
                    ColumnModification::key("Id", "p3", Value::Int32(None)),
                    ColumnModification::read("Version", "p4", Value::Int32(None)),
                ],
            )
            .unwrap(),
        );
        batch.push(
            ModificationCommand::new(
                TableRef::new("Accounts"),
                vec![ColumnModification::key("Id", "p5", Value::Int32(None))],
            )
            .unwrap(),
        );
        let mut out = String::new();
        let mappings = batch.write(&WRITER, &mut out).unwrap();
        assert_eq!(mappings, vec![ResultSetMapping::LastInResultSet; 3]);
        assert_eq!(
            out,
            indoc! {r#"
                DECLARE
                v_RowCount INTEGER;
                vp1_Id INTEGER;
                vp4_Version INTEGER;
                BEGIN
                INSERT INTO "Orders" ("Amount")
                VALUES (:p0)
                RETURNING "Id" INTO vp1_Id;
                OPEN :cur0 FOR SELECT vp1_Id FROM DUAL;
                UPDATE "Accounts" SET "Balance" = :p2
                WHERE "Id" = :p3
                RETURN "Version" INTO vp4_Version;
                v_RowCount := SQL%ROWCOUNT;
                OPEN :cur1 FOR
                SELECT vp4_Version
                FROM DUAL
                WHERE v_RowCount = 1;
                DELETE FROM "Accounts"
                WHERE "Id" = :p5;
                v_RowCount := SQL%ROWCOUNT;
                OPEN :cur2 FOR SELECT v_RowCount FROM DUAL;
                END;
            "#}
        );
    }

    #[test]
    fn separated_runs_get_distinct_collections() {
        let mut batch = ModificationCommandBatch::new();
        batch.push(insert_with_read("Orders", "p0", "r0"));
        batch.push(insert_with_read("Orders", "p1", "r1"));
        batch.push(
            ModificationCommand::new(
                TableRef::new("Accounts"),
                vec![
                    ColumnModification::write("Balance", "p2", Value::Int64(None)),
                    ColumnModification::key("Id", "p3", Value::Int32(None)),
                ],
            )
            .unwrap(),
        );
        batch.push(insert_with_read("Orders", "p4", "r4"));
        batch.push(insert_with_read("Orders", "p5", "r5"));
        let mut out = String::new();
        let mappings = batch.write(&WRITER, &mut out).unwrap();
        assert_eq!(mappings, vec![ResultSetMapping::LastInResultSet; 5]);
        assert_eq!(
            out,
            indoc! {r#"
                DECLARE
                v_RowCount INTEGER;
                TYPE efRowOrders_0 IS RECORD
                (
                Id INTEGER
                );
                TYPE efOrders_0 IS TABLE OF efRowOrders_0;
                listOrders_0 efOrders_0;
                TYPE efRowOrders_3 IS RECORD
                (
                Id INTEGER
                );
                TYPE efOrders_3 IS TABLE OF efRowOrders_3;
                listOrders_3 efOrders_3;
                BEGIN
                listOrders_0 := efOrders_0();
                listOrders_0.extend(2);
                INSERT INTO "Orders" ("Amount")
                VALUES (:p0)
                RETURNING "Id" INTO listOrders_0(1);
                INSERT INTO "Orders" ("Amount")
                VALUES (:p1)
                RETURNING "Id" INTO listOrders_0(2);
                OPEN :cur0 FOR SELECT listOrders_0(1).Id FROM DUAL;
                OPEN :cur1 FOR SELECT listOrders_0(2).Id FROM DUAL;
                UPDATE "Accounts" SET "Balance" = :p2
                WHERE "Id" = :p3;
                v_RowCount := SQL%ROWCOUNT;
                OPEN :cur2 FOR SELECT v_RowCount FROM DUAL;
                listOrders_3 := efOrders_3();
                listOrders_3.extend(2);
                INSERT INTO "Orders" ("Amount")
                VALUES (:p4)
                RETURNING "Id" INTO listOrders_3(1);
                INSERT INTO "Orders" ("Amount")
                VALUES (:p5)
                RETURNING "Id" INTO listOrders_3(2);
                OPEN :cur3 FOR SELECT listOrders_3(1).Id FROM DUAL;
                OPEN :cur4 FOR SELECT listOrders_3(2).Id FROM DUAL;
                END;
            "#}
        );
    }
}
