mod test_endpoints;
