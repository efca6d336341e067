mod lookup_query;
