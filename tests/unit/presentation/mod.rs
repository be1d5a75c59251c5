mod test_table;
